//! Tests for command-line parsing, option validation and the generation run

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use subtiling::TilingError;
    use subtiling::io::cli::{Cli, ColoringMode, TilingRunner};
    use subtiling::io::configuration::{CANVAS_SIZE, DEFAULT_LEVEL, DEFAULT_THRESHOLD};
    use subtiling::render::{Color, Coloring, Palette};
    use subtiling::subdivision::Rule;

    // Tests CLI parsing with only the required output argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "out.svg"]);

        assert_eq!(cli.output, PathBuf::from("out.svg"));
        assert_eq!(cli.rule, Rule::Golden);
        assert_eq!(cli.level, DEFAULT_LEVEL);
        assert_eq!(cli.threshold, DEFAULT_THRESHOLD);
        assert_eq!(cli.canvas, CANVAS_SIZE);
        assert_eq!(cli.coloring, ColoringMode::Repartition);
        assert!(!cli.strokes);
        assert!(cli.palette.is_none());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with every option set
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "tiling.svg",
            "--rule",
            "pleasing",
            "--level",
            "5",
            "--angle",
            "3",
            "--palette",
            "2",
            "--strokes",
            "--threshold",
            "4",
            "--coloring",
            "kind-ramp",
            "--canvas",
            "500",
            "--caption",
            "hello",
            "--seed",
            "77",
            "--quiet",
        ]);

        assert_eq!(cli.rule, Rule::Pleasing);
        assert_eq!(cli.level, 5);
        assert_eq!(cli.angle, 3);
        assert_eq!(cli.palette, Some(2));
        assert!(cli.strokes);
        assert_eq!(cli.threshold, 4);
        assert_eq!(cli.coloring, ColoringMode::KindRamp);
        assert_eq!(cli.canvas, 500);
        assert_eq!(cli.caption.as_deref(), Some("hello"));
        assert_eq!(cli.seed, Some(77));
        assert!(!cli.should_show_progress());
    }

    // Tests short flags
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "o.svg", "-r", "rhombus", "-l", "3", "-a", "5", "-c", "1", "-s", "-t",
            "0", "-q",
        ]);

        assert_eq!(cli.rule, Rule::Rhombus);
        assert_eq!(cli.level, 3);
        assert_eq!(cli.angle, 5);
        assert_eq!(cli.palette, Some(1));
        assert!(cli.strokes);
        assert_eq!(cli.threshold, 0);
        assert!(cli.quiet);
    }

    // Tests that clap rejects missing output, bad thresholds and conflicting colors
    // Verified by removing the conflicts_with_all attribute
    #[test]
    fn test_cli_rejects_invalid_combinations() {
        assert!(Cli::try_parse_from(["program"]).is_err());
        assert!(Cli::try_parse_from(["program", "o.svg", "--threshold", "11"]).is_err());
        assert!(
            Cli::try_parse_from([
                "program",
                "o.svg",
                "--palette",
                "1",
                "--color-begin",
                "000000",
                "--color-end",
                "FFFFFF"
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["program", "o.svg", "--color-begin", "000000"]).is_err());
        assert!(Cli::try_parse_from(["program", "o.svg", "--canvas", "0"]).is_err());
    }

    // Tests palette resolution from presets and explicit endpoints
    // Verified by ignoring the explicit endpoints
    #[test]
    fn test_palette_resolution() {
        let preset = Cli::parse_from(["program", "o.svg", "-c", "3"]).palette();
        assert_eq!(preset.ok(), Palette::preset(3).ok());

        let default = Cli::parse_from(["program", "o.svg"]).palette();
        assert_eq!(default.ok(), Palette::preset(0).ok());

        let explicit = Cli::parse_from([
            "program",
            "o.svg",
            "--color-begin",
            "#000000",
            "--color-end",
            "FFFFFF",
        ])
        .palette();
        let expected = Palette::interpolate(Color::rgb(0, 0, 0), Color::rgb(255, 255, 255));
        assert_eq!(explicit.ok(), Some(expected));
    }

    // Tests configuration errors surfaced without clap's checks
    // Verified by defaulting unknown indices to preset 0
    #[test]
    fn test_palette_errors() {
        let unknown = Cli::parse_from(["program", "o.svg", "-c", "9"]).palette();
        assert!(matches!(unknown, Err(TilingError::UnknownPalette { index: 9, .. })));

        let mut conflicting = Cli::parse_from(["program", "o.svg", "-c", "1"]);
        conflicting.color_begin = Some("000000".to_string());
        assert!(matches!(
            conflicting.palette(),
            Err(TilingError::Configuration { .. })
        ));

        let mut half = Cli::parse_from(["program", "o.svg"]);
        half.color_end = Some("FFFFFF".to_string());
        assert!(matches!(half.palette(), Err(TilingError::Configuration { .. })));

        let bad_hex = Cli::parse_from([
            "program",
            "o.svg",
            "--color-begin",
            "zzzzzz",
            "--color-end",
            "FFFFFF",
        ])
        .palette();
        assert!(matches!(bad_hex, Err(TilingError::InvalidColor { .. })));
    }

    // Tests that coloring modes map to the matching renderer strategy
    // Verified by returning the repartition strategy for ramps
    #[test]
    fn test_coloring_modes() {
        let repartition = Cli::parse_from(["program", "o.svg"]).coloring();
        assert!(matches!(repartition, Ok(Coloring::Repartition { .. })));

        let ramp = Cli::parse_from(["program", "o.svg", "--coloring", "ramp"]).coloring();
        assert!(matches!(ramp, Ok(Coloring::Ramp { secondary: None, .. })));

        let split = Cli::parse_from(["program", "o.svg", "--coloring", "kind-ramp"]).coloring();
        assert!(matches!(split, Ok(Coloring::Ramp { secondary: Some(_), .. })));

        let renderer = Cli::parse_from(["program", "o.svg", "-s", "-t", "3"]).renderer();
        assert!(matches!(renderer, Ok(r) if r.strokes && r.threshold.value() == 3));
    }

    // Tests a full run writing an SVG file with the expected tile counts
    // Verified by skipping the save call
    #[test]
    fn test_runner_writes_svg() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let output = dir.path().join("penrose.svg");
        let output_arg = output.to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "program",
            output_arg.as_str(),
            "--level",
            "2",
            "--seed",
            "5",
            "--strokes",
            "--caption",
            "level 2",
            "--quiet",
        ]);

        let runner = TilingRunner::new(cli);
        let Ok(summary) = runner.run() else {
            unreachable!("run should succeed");
        };

        assert_eq!(summary.coarse_tiles, 96);
        assert_eq!(summary.fine_tiles, 384);
        assert_eq!(summary.paths, 23);

        let content = fs::read_to_string(&output).unwrap_or_default();
        assert!(content.starts_with("<svg"));
        assert_eq!(content.matches("<path").count(), 23);
        assert!(content.contains(">level 2</text>"));
    }

    // Tests the single-layer pleasing run
    // Verified by forcing a fine layer for every rule
    #[test]
    fn test_runner_pleasing_single_layer() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let output = dir.path().join("pleasing.svg");
        let output_arg = output.to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "program",
            output_arg.as_str(),
            "--rule",
            "pleasing",
            "--level",
            "6",
            "-q",
        ]);

        let summary = TilingRunner::new(cli).run();
        assert!(matches!(
            summary,
            Ok(s) if s.coarse_tiles == 128 && s.fine_tiles == 0 && s.paths == 11
        ));
    }

    // Tests that configuration errors are reported before the output is touched
    // Verified by validating the palette after saving
    #[test]
    fn test_runner_reports_configuration_first() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let output = dir.path().join("never.svg");
        let output_arg = output.to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", output_arg.as_str(), "-c", "7", "-l", "1", "-q"]);

        let result = TilingRunner::new(cli).run();
        assert!(matches!(result, Err(TilingError::UnknownPalette { .. })));
        assert!(!output.exists());
    }

    // Tests that an unwritable destination becomes a file system error
    // Verified by swallowing the save error
    #[test]
    fn test_runner_unwritable_output() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let output = dir.path().join("missing").join("out.svg");
        let output_arg = output.to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", output_arg.as_str(), "-l", "1", "-q"]);

        let result = TilingRunner::new(cli).run();
        assert!(matches!(result, Err(TilingError::FileSystem { .. })));
        let message = result.err().map(|error| error.to_string()).unwrap_or_default();
        assert!(message.contains("out.svg"), "{message}");
    }
}
