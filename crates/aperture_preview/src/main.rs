// SPDX-License-Identifier: MIT OR Apache-2.0
//! Aperture Preview - print a camera profile's playback
//!
//! Builds a profile from fixture commands given on the command line and
//! samples it tick by tick, or prints it as RON or JSON.
//!
//! ```text
//! aperture_preview [--settings FILE] [--format samples|ron|json] "<type> <duration> [args...]"...
//! ```

mod settings;

use aperture_camera::{CameraProfile, ConstructionError, Fixture, Position, ProfileError};
use clap::{Parser, ValueEnum};
use settings::PreviewSettings;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Error while running the preview
#[derive(Debug, thiserror::Error)]
enum PreviewError {
    /// Settings file could not be read
    #[error("Failed to load settings {path:?}: {source}")]
    Settings {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A fixture command was rejected
    #[error("Fixture command \"{command}\": {source}")]
    Fixture {
        command: String,
        source: ConstructionError,
    },

    /// Profile could not be serialized
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Output {
    /// One line per sampled tick
    #[default]
    Samples,
    /// The profile as RON
    Ron,
    /// The profile as JSON
    Json,
}

/// Preview playback of an Aperture camera profile
#[derive(Parser, Debug)]
#[command(name = "aperture_preview")]
#[command(about = "Build a camera profile from fixture commands and print its playback")]
#[command(version)]
struct Args {
    /// Preview settings file (RON)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Output::Samples)]
    format: Output,

    /// Fixture commands, e.g. "idle 20" or "look 40 0 64 0"
    #[arg(required = true)]
    commands: Vec<String>,
}

fn build_profile(commands: &[String], origin: &Position) -> Result<CameraProfile, PreviewError> {
    let mut profile = CameraProfile::new();

    for command in commands {
        let tokens: Vec<&str> = command.split_whitespace().collect();
        let fixture = Fixture::from_command(&tokens, origin).map_err(|source| PreviewError::Fixture {
            command: command.clone(),
            source,
        })?;
        profile.add(fixture);
    }

    Ok(profile)
}

fn sample_lines(profile: &mut CameraProfile, settings: &PreviewSettings) -> Vec<String> {
    let mut position = settings.origin;
    let stride = settings.sample_stride.max(1) as usize;

    (0..profile.duration())
        .step_by(stride)
        .map(|tick| {
            profile.apply_at(tick as i64, settings.partial, &mut position);
            format!(
                "{:>6} {:>8.2}s  x={:.3} y={:.3} z={:.3}  yaw={:.2} pitch={:.2} fov={:.1}",
                tick,
                settings.seconds(tick),
                position.point.x,
                position.point.y,
                position.point.z,
                position.angle.yaw,
                position.angle.pitch,
                position.angle.fov,
            )
        })
        .collect()
}

fn run(args: Args) -> Result<(), PreviewError> {
    let settings = match &args.settings {
        Some(path) => PreviewSettings::load(path).map_err(|source| PreviewError::Settings {
            path: path.clone(),
            source,
        })?,
        None => PreviewSettings::default(),
    };

    let mut profile = build_profile(&args.commands, &settings.origin)?;
    tracing::info!("{}", profile);

    match args.format {
        Output::Samples => {
            for line in sample_lines(&mut profile, &settings) {
                println!("{line}");
            }
        }
        Output::Ron => println!("{}", profile.to_ron()?),
        Output::Json => println!("{}", profile.to_json()?),
    }

    Ok(())
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("aperture_preview=info".parse().unwrap())
        .add_directive("aperture_camera=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting Aperture Preview v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = Args::try_parse_from(["aperture_preview", "--format", "json", "idle 10", "-s", "preview.ron", "look 5 0 0 1"]).unwrap();
        assert_eq!(parsed.format, Output::Json);
        assert_eq!(parsed.settings, Some(PathBuf::from("preview.ron")));
        assert_eq!(parsed.commands, args(&["idle 10", "look 5 0 0 1"]));

        let defaults = Args::try_parse_from(["aperture_preview", "idle 10"]).unwrap();
        assert_eq!(defaults.format, Output::Samples);
        assert!(defaults.settings.is_none());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(Args::try_parse_from(["aperture_preview"]).is_err());
        assert!(Args::try_parse_from(["aperture_preview", "--settings"]).is_err());
        assert!(Args::try_parse_from(["aperture_preview", "--format", "yaml", "idle 1"]).is_err());
    }

    #[test]
    fn test_build_profile() {
        let commands = args(&["idle 10", "circular 40 8 180", "path 20 cubic"]);
        let profile = build_profile(&commands, &Position::default()).unwrap();
        assert_eq!(profile.count(), 3);
        assert_eq!(profile.duration(), 70);
    }

    #[test]
    fn test_build_profile_reports_command() {
        let commands = args(&["idle 10", "dolly 5"]);
        let err = build_profile(&commands, &Position::default()).unwrap_err();
        match err {
            PreviewError::Fixture { command, source } => {
                assert_eq!(command, "dolly 5");
                assert!(matches!(source, ConstructionError::UnknownType(token) if token == "dolly"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_sample_lines() {
        let settings = PreviewSettings {
            sample_stride: 10,
            ..PreviewSettings::default()
        };
        let mut profile = build_profile(&args(&["idle 15", "idle 10"]), &settings.origin).unwrap();

        let lines = sample_lines(&mut profile, &settings);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with("10"));
        assert!(lines[2].contains("1.00s"));
    }
}
