//! Job runner: forward model plus CSV/JSON export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use terrella_core::forward::{simulate, ForwardError};
use terrella_core::profile::half_width;
use terrella_core::types::SurveyResult;

use crate::config::JobConfig;

/// Run the forward model for a job and write the requested outputs.
pub fn run_job(job: &JobConfig, out_dir: &Path) -> Result<()> {
    let params = job.survey.to_params();
    let result = simulate(&params).context("forward model failed")?;

    let (min, max) = result.map.value_range();
    println!(
        "  {} {:?}: {}x{} stations, anomaly [{:.3}, {:.3}] nT",
        params.component.label(),
        params.source,
        result.map.nx,
        result.map.ny,
        min,
        max
    );

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    if job.output.save_map {
        let path = out_dir.join("field_map.csv");
        write_map_csv(&result, &path)?;
        println!("  wrote {}", path.display());
    }
    if job.output.save_profile {
        let path = out_dir.join("profile.csv");
        write_profile_csv(&result, &path)?;
        println!("  wrote {}", path.display());
    }
    if job.output.save_json {
        let path = out_dir.join("result.json");
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)?;
        println!("  wrote {}", path.display());
    }

    if job.output.half_width {
        match half_width(&result.profile, params.spacing) {
            Ok(hw) => println!(
                "  half-width: {:.1} m ({:.2} to {:.2})",
                hw.width, hw.positions[0], hw.positions[1]
            ),
            Err(e @ ForwardError::DegenerateProfile { .. }) => {
                log::warn!("{e}");
                println!("  half-width: not defined for this profile");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Write the anomaly map as `x,y,nT` rows, one per station.
fn write_map_csv(result: &SurveyResult, path: &Path) -> Result<()> {
    let map = &result.map;
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "x_m,y_m,anomaly_nt")?;

    let half_dx = (map.extent[1] - map.extent[0]) / map.nx as f64 / 2.0;
    for iy in 0..map.ny {
        for ix in 0..map.nx {
            let x = map.extent[0] + (2.0 * ix as f64 + 1.0) * half_dx;
            let y = map.extent[2] + (2.0 * iy as f64 + 1.0) * half_dx;
            writeln!(file, "{:.3},{:.3},{:.6e}", x, y, map.values[iy * map.nx + ix])?;
        }
    }
    Ok(())
}

/// Write the profile as `position,nT` rows.
fn write_profile_csv(result: &SurveyResult, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "position_m,anomaly_nt")?;
    for (&x, &v) in result
        .profile
        .positions
        .iter()
        .zip(result.profile.values.iter())
    {
        writeln!(file, "{:.3},{:.6e}", x, v)?;
    }
    Ok(())
}
