use clap::{error::ErrorKind, Parser};
use ws281x_matrix_cli::{exit_status, Cli, SceneKind};
use ws281x_matrix_core::{
    config::PRIMARY_CHANNEL, test_utils::MemoryDriver, Color, Configuration, Driver, Error,
    Hertz, Matrix, Scene, StripType,
};

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("ws281x-matrix").chain(args.iter().copied()))
}

fn configuration(args: &[&str]) -> ws281x_matrix_core::Result<Configuration> {
    parse(args).unwrap().configuration()
}

#[test]
fn test_defaults() {
    let cli = parse(&[]).unwrap();
    assert_eq!(cli.scene, SceneKind::Fill);
    assert!(cli.completions.is_none());

    let config = cli.configuration().unwrap();
    assert_eq!(config, Configuration::default());

    let channel = config.primary_channel();
    assert_eq!(channel.led_count, 300);
    assert_eq!(channel.gpio_pin, 18);
    assert_eq!(channel.strip_type, StripType::Gbr);
    assert_eq!(channel.brightness, 255);
    assert!(!channel.invert);
    assert_eq!(config.dma_channel, 10);
    assert_eq!(config.target_freq, Hertz(800_000));
    assert_eq!(config.fill, Color(0x0010_1010));
    assert!(!config.clear_on_exit);
}

#[test]
fn test_short_and_long_options() {
    let config = configuration(&[
        "-d", "5", "-g", "12", "-i", "-c", "-s", "GRBW", "-l", "64", "-f", "0x20ff00ff", "-b",
        "100",
    ])
    .unwrap();

    let channel = config.primary_channel();
    assert_eq!(config.dma_channel, 5);
    assert_eq!(channel.gpio_pin, 12);
    assert!(channel.invert);
    assert!(config.clear_on_exit);
    assert_eq!(channel.strip_type, StripType::Grbw);
    assert_eq!(channel.led_count, 64);
    assert_eq!(config.fill, Color::rgbw(0xff, 0x00, 0xff, 0x20));
    assert_eq!(channel.brightness, 100);

    let config = configuration(&[
        "--dma=13",
        "--gpio",
        "21",
        "--clear",
        "--strip",
        "rgb",
        "--length",
        "1",
        "--fill",
        "ABCDEF",
        "--freq",
        "400000",
    ])
    .unwrap();
    assert_eq!(config.dma_channel, 13);
    assert_eq!(config.primary_channel().gpio_pin, 21);
    assert_eq!(config.primary_channel().led_count, 1);
    assert_eq!(config.fill, Color(0x00ab_cdef));
    assert_eq!(config.target_freq, Hertz(400_000));
}

#[test]
fn test_fill_frame_is_copied_to_driver() {
    let config = configuration(&["--length", "10", "--fill", "ff0000", "--strip", "rgb"]).unwrap();
    assert_eq!(config.primary_channel().strip_type, StripType::Rgb);

    let cli = parse(&[]).unwrap();
    let mut scene = cli.scene(&config);
    let mut matrix = Matrix::new(config.led_count());
    scene.start(&mut matrix);

    let mut driver = MemoryDriver::new();
    driver.init(&config).unwrap();
    matrix.render_to(driver.leds_mut(PRIMARY_CHANNEL));
    driver.render().unwrap();

    assert_eq!(driver.frames, vec![vec![Color(0x00ff_0000); 10]]);
}

#[test]
fn test_invalid_values() {
    let cases: &[(&[&str], Error, &str)] = &[
        (&["--dma", "20"], Error::InvalidDma(20), "invalid dma 20"),
        (&["-d", "14"], Error::InvalidDma(14), "invalid dma 14"),
        (&["-d", "-1"], Error::InvalidDma(-1), "invalid dma -1"),
        (
            &["--length", "0"],
            Error::InvalidLedCount(0),
            "invalid led_count 0",
        ),
        (
            &["-l", "-5"],
            Error::InvalidLedCount(-5),
            "invalid led_count -5",
        ),
        (
            &["--strip", "xyz"],
            Error::InvalidStrip("xyz".to_owned()),
            "invalid strip xyz",
        ),
        (
            &["-s", "rgbwx"],
            Error::InvalidStrip("rgbwx".to_owned()),
            "invalid strip rgbwx",
        ),
        (
            &["--fill", "red"],
            Error::InvalidFill("red".to_owned()),
            "invalid fill red",
        ),
        (
            &["-b", "256"],
            Error::InvalidBrightness(256),
            "invalid brightness 256",
        ),
        (
            &["--freq", "0"],
            Error::InvalidFrequency(0),
            "invalid freq 0",
        ),
    ];

    for (args, error, message) in cases {
        let err = configuration(args).unwrap_err();
        assert_eq!(&err, error, "args: {args:?}");
        assert_eq!(err.to_string(), *message);
        assert!(err.is_config_error());
        assert_eq!(exit_status(err.status_code()), 255);
    }
}

#[test]
fn test_gpio_is_not_validated() {
    let config = configuration(&["--gpio", "-3"]).unwrap();
    assert_eq!(config.primary_channel().gpio_pin, -3);
}

#[test]
fn test_terminating_arguments() {
    let cases: &[(&[&str], ErrorKind)] = &[
        (&["--bogus"], ErrorKind::UnknownArgument),
        (&["-x"], ErrorKind::UnknownArgument),
        (&["--dma", "ten"], ErrorKind::ValueValidation),
        (&["-h"], ErrorKind::DisplayHelp),
        (&["--help"], ErrorKind::DisplayHelp),
        (&["-v"], ErrorKind::DisplayVersion),
        (&["--version"], ErrorKind::DisplayVersion),
    ];

    for (args, kind) in cases {
        let err = parse(args).unwrap_err();
        assert_eq!(err.kind(), *kind, "args: {args:?}");
    }

    let version = parse(&["-v"]).unwrap_err().to_string();
    assert!(version.starts_with("ws281x-matrix "), "{version}");
}

#[test]
fn test_scene_selection() {
    let cli = parse(&["--scene", "ticker", "--length", "3", "--fill", "ff"]).unwrap();
    assert_eq!(cli.scene, SceneKind::Ticker);

    let config = cli.configuration().unwrap();
    let mut scene = cli.scene(&config);
    let mut matrix = Matrix::new(config.led_count());
    scene.start(&mut matrix);
    assert_eq!(matrix.as_slice(), &[Color(0xff), Color::BLACK, Color::BLACK]);

    scene.next_frame(&mut matrix);
    assert_eq!(matrix.as_slice(), &[Color::BLACK, Color(0xff), Color::BLACK]);

    assert!(parse(&["--scene", "plasma"]).is_err());
}

#[test]
fn test_completions_option() {
    let cli = parse(&["--completions", "bash"]).unwrap();
    assert!(matches!(
        cli.completions,
        Some(clap_complete_command::Shell::Bash)
    ));
}

#[test]
fn test_exit_status() {
    assert_eq!(exit_status(0), 0);
    assert_eq!(exit_status(-1), 255);
    assert_eq!(exit_status(-7), 249);
    assert_eq!(exit_status(-14), 242);
}
