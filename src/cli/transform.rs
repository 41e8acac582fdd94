//! Transform commands.
//!
//! Every command follows the same shape: load the input pictures, apply a
//! single [`Transformation`], save the result to the last path given.

use std::path::PathBuf;

use clap::Args;

use crate::codec::{load_picture, save_picture};
use crate::error::{PictureError, Result};
use crate::output::{dimensions, display_path, plural};
use crate::process::{common_extent, Angle, Axis, ExtentPolicy, Transformation};
use crate::types::Grid;

use super::Context;

/// A fully resolved command: what to apply, to which files, where to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub transformation: Transformation,
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

/// Arguments for transforms that take one picture and no parameter
#[derive(Args, Debug)]
pub struct SingleArgs {
    /// Picture to load
    pub input: PathBuf,

    /// Where to save the result
    pub output: PathBuf,
}

impl SingleArgs {
    pub fn into_job(self, transformation: Transformation) -> Job {
        Job {
            transformation,
            inputs: vec![self.input],
            output: self.output,
        }
    }
}

/// Rotate a picture clockwise
#[derive(Args, Debug)]
pub struct RotateArgs {
    /// Angle in degrees: 90, 180 or 270
    pub angle: Angle,

    /// Picture to load
    pub input: PathBuf,

    /// Where to save the result
    pub output: PathBuf,
}

impl RotateArgs {
    pub fn into_job(self) -> Job {
        Job {
            transformation: Transformation::Rotate(self.angle),
            inputs: vec![self.input],
            output: self.output,
        }
    }
}

/// Mirror a picture
#[derive(Args, Debug)]
pub struct FlipArgs {
    /// Direction: H (left-right) or V (top-bottom)
    pub direction: Axis,

    /// Picture to load
    pub input: PathBuf,

    /// Where to save the result
    pub output: PathBuf,
}

impl FlipArgs {
    pub fn into_job(self) -> Job {
        Job {
            transformation: Transformation::Flip(self.direction),
            inputs: vec![self.input],
            output: self.output,
        }
    }
}

/// Average several pictures
#[derive(Args, Debug)]
pub struct BlendArgs {
    /// Pictures to load followed by where to save the result
    #[arg(required = true, num_args = 2.., value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

impl BlendArgs {
    pub fn into_job(self) -> Result<Job> {
        let (inputs, output) = split_output(self.paths)?;
        Ok(Job {
            transformation: Transformation::Blend,
            inputs,
            output,
        })
    }
}

/// Tile several pictures into a mosaic
#[derive(Args, Debug)]
pub struct MosaicArgs {
    /// Side length of each square tile, in pixels
    pub tile_size: usize,

    /// Pictures to load followed by where to save the result
    #[arg(required = true, num_args = 2.., value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

impl MosaicArgs {
    pub fn into_job(self) -> Result<Job> {
        let (inputs, output) = split_output(self.paths)?;
        Ok(Job {
            transformation: Transformation::Mosaic {
                tile_size: self.tile_size,
            },
            inputs,
            output,
        })
    }
}

/// Split `<inputs>... <output>` into its two parts.
fn split_output(mut paths: Vec<PathBuf>) -> Result<(Vec<PathBuf>, PathBuf)> {
    if paths.len() < 2 {
        return Err(PictureError::InvalidParameter {
            message: "expected at least one picture to load and one to save".to_string(),
            help: Some("<transformation> <arguments> <image(s) to load> <image to save>".to_string()),
        });
    }

    let output = paths.pop().ok_or_else(|| PictureError::invalid("missing output path"))?;
    Ok((paths, output))
}

/// Load, transform and save.
pub fn run(job: Job, ctx: &Context) -> Result<()> {
    let printer = &ctx.printer;

    let mut pictures = Vec::with_capacity(job.inputs.len());
    for path in &job.inputs {
        printer.status("Loading", &display_path(path));
        let picture = load_picture(path)?;
        printer.verbose(
            "Decoded",
            &format!("{} ({})", display_path(path), dimensions(picture.width(), picture.height())),
        );
        pictures.push(picture);
    }

    if job.transformation.is_multi_input() {
        warn_on_mismatch(&job.transformation, &pictures, ctx)?;
    }

    printer.status("Applying", &job.transformation.to_string());
    let output = job.transformation.apply(&pictures, ctx.policy)?;

    printer.status("Writing", &display_path(&job.output));
    save_picture(&output, &job.output)?;

    printer.info(
        "Finished",
        &format!(
            "{} from {} ({})",
            job.transformation,
            plural(pictures.len(), "picture", "pictures"),
            dimensions(output.width(), output.height())
        ),
    );

    Ok(())
}

/// Warn when differently sized inputs are about to be cut down.
fn warn_on_mismatch(
    transformation: &Transformation,
    pictures: &[Grid],
    ctx: &Context,
) -> Result<()> {
    let Some(first) = pictures.first() else {
        return Ok(());
    };
    if pictures.iter().all(|p| p.size() == first.size()) || ctx.policy != ExtentPolicy::Smallest {
        return Ok(());
    }

    let message = match transformation {
        Transformation::Mosaic { .. } => format!(
            "pictures differ in size; mosaic canvas follows the first picture ({})",
            dimensions(first.width(), first.height())
        ),
        _ => {
            let (w, h) = common_extent(pictures, ctx.policy)?;
            format!("pictures differ in size; using common extent {}", dimensions(w, h))
        }
    };
    ctx.printer.warning("Warning", &message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn job_for(args: &[&str]) -> Result<Job> {
        let cli = Cli::parse_from(args);
        match cli.command {
            Commands::Invert(a) => Ok(a.into_job(Transformation::Invert)),
            Commands::Grayscale(a) => Ok(a.into_job(Transformation::Grayscale)),
            Commands::Rotate(a) => Ok(a.into_job()),
            Commands::Flip(a) => Ok(a.into_job()),
            Commands::Blur(a) => Ok(a.into_job(Transformation::Blur)),
            Commands::Blend(a) => a.into_job(),
            Commands::Mosaic(a) => a.into_job(),
            Commands::Completions(_) => unreachable!(),
        }
    }

    #[test]
    fn test_rotate_job() {
        let job = job_for(&["picture", "rotate", "90", "in.png", "out.png"]).unwrap();
        assert_eq!(job.transformation, Transformation::Rotate(Angle::Deg90));
        assert_eq!(job.inputs, vec![PathBuf::from("in.png")]);
        assert_eq!(job.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_flip_job_lowercase() {
        let job = job_for(&["picture", "flip", "v", "in.png", "out.png"]).unwrap();
        assert_eq!(job.transformation, Transformation::Flip(Axis::Vertical));
    }

    #[test]
    fn test_rotate_rejects_bad_angle() {
        assert!(Cli::try_parse_from(["picture", "rotate", "45", "in.png", "out.png"]).is_err());
    }

    #[test]
    fn test_flip_rejects_bad_direction() {
        assert!(Cli::try_parse_from(["picture", "flip", "X", "in.png", "out.png"]).is_err());
    }

    #[test]
    fn test_blend_job_splits_output() {
        let job = job_for(&["picture", "blend", "a.png", "b.png", "out.png"]).unwrap();
        assert_eq!(job.transformation, Transformation::Blend);
        assert_eq!(job.inputs, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(job.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_blend_requires_output() {
        assert!(Cli::try_parse_from(["picture", "blend", "a.png"]).is_err());
    }

    #[test]
    fn test_mosaic_job() {
        let job = job_for(&["picture", "mosaic", "10", "a.png", "b.png", "c.png", "out.png"]).unwrap();
        assert_eq!(job.transformation, Transformation::Mosaic { tile_size: 10 });
        assert_eq!(job.inputs.len(), 3);
    }

    #[test]
    fn test_mosaic_rejects_non_numeric_tile() {
        assert!(Cli::try_parse_from(["picture", "mosaic", "ten", "a.png", "out.png"]).is_err());
    }

    #[test]
    fn test_split_output_too_short() {
        assert!(split_output(vec![PathBuf::from("only.png")]).is_err());
    }
}
