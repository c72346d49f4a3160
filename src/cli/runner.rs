use tracing::info;
use tracing_subscriber::EnvFilter;

use whiteborder::{
    AspectMode, AspectRatio, BorderConfig, Margins, MatAspect, OrientationSettings,
    load_preset, process_files_to_archive, save_preset,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("whiteborder=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("whiteborder=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn mat_from_args(
    border: Option<AspectRatio>,
    image: Option<AspectRatio>,
    orientation: &str,
) -> Result<Option<MatAspect>, AppError> {
    match (border, image) {
        (Some(border), Some(image)) => Ok(Some(MatAspect { border, image })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(AppError::MissingArgument {
            arg: format!("--{}-image-aspect", orientation),
        }),
        (None, Some(_)) => Err(AppError::MissingArgument {
            arg: format!("--{}-border-aspect", orientation),
        }),
    }
}

pub fn build_config(args: &CliArgs) -> Result<BorderConfig, AppError> {
    if let Some(preset) = &args.preset {
        return Ok(load_preset(preset)?);
    }

    let aspect = if args.keep_aspect {
        AspectMode::KeepOriginal
    } else {
        AspectMode::Fit {
            ratio: args.aspect,
            strategy: args.fit,
        }
    };

    let config = BorderConfig {
        aspect,
        portrait: OrientationSettings {
            margins: Margins::new(args.portrait_h_padding, args.portrait_v_padding),
            mat: mat_from_args(
                args.portrait_border_aspect,
                args.portrait_image_aspect,
                "portrait",
            )?,
        },
        landscape: OrientationSettings {
            margins: Margins::new(args.landscape_h_padding, args.landscape_v_padding),
            mat: mat_from_args(
                args.landscape_border_aspect,
                args.landscape_image_aspect,
                "landscape",
            )?,
        },
    };

    config.validate()?;
    Ok(config)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let config = build_config(&args)?;

    if let Some(path) = &args.save_preset {
        save_preset(path, &config)?;
    }

    if args.inputs.is_empty() {
        info!("No input files given, nothing to process");
        return Ok(());
    }

    if let Some(missing) = args.inputs.iter().find(|p| !p.is_file()) {
        return Err(AppError::InputNotFound {
            path: missing.clone(),
        }
        .into());
    }

    info!("Output archive: {:?}", args.output);
    let report = process_files_to_archive(&args.inputs, &args.output, &config)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Archive size: {} bytes", report.archive_bytes);

    Ok(())
}
