use std::time::Duration;

use ws281x_matrix_core::{
    test_utils::{ManualTimer, MemoryDriver},
    AppConfig, Color, Configuration, DriverError, Error, Fill, Scene, ShutdownToken, StripType,
    WanderingLight, FRAME_RATE,
};

fn config(length: i64, clear_on_exit: bool) -> Configuration {
    Configuration::builder()
        .length(length)
        .fill("ff0000")
        .strip("rgb")
        .clear_on_exit(clear_on_exit)
        .build()
        .unwrap()
}

fn run<S: Scene>(
    config: Configuration,
    driver: &mut MemoryDriver,
    timer: &mut ManualTimer,
    scene: S,
    shutdown: ShutdownToken,
) -> ws281x_matrix_core::Result<()> {
    let _ = env_logger::try_init();

    AppConfig {
        config,
        driver,
        timer,
        scene,
        shutdown,
    }
    .into_app()
    .run()
}

#[test]
fn test_fill_until_interrupted() {
    let config = config(10, false);
    assert_eq!(config.primary_channel().strip_type, StripType::Rgb);
    assert_eq!(config.dma_channel, 10);

    let shutdown = ShutdownToken::new();
    let mut driver = MemoryDriver::new().shutdown_after(3, shutdown.clone());
    let mut timer = ManualTimer::default();
    let fill = Fill(config.fill);

    let result = run(config.clone(), &mut driver, &mut timer, fill, shutdown);
    assert_eq!(result, Ok(()));

    assert_eq!(driver.config, Some(config));
    assert_eq!(driver.frames, vec![vec![Color(0x00ff_0000); 10]; 3]);
    assert_eq!((driver.init_calls, driver.fini_calls), (1, 1));
    // Every frame is followed by the full frame period.
    assert_eq!(timer.waits, vec![Duration::from(FRAME_RATE); 3]);
}

#[test]
fn test_clear_on_exit_after_signal() {
    let config = config(4, true);

    let shutdown = ShutdownToken::new();
    let mut driver = MemoryDriver::new().shutdown_after(2, shutdown.clone());
    let mut timer = ManualTimer::default();

    let result = run(config, &mut driver, &mut timer, Fill(Color(0x00ff_0000)), shutdown);
    assert_eq!(result, Ok(()));

    // Two live frames and exactly one clear frame.
    assert_eq!(
        driver.frames,
        vec![
            vec![Color(0x00ff_0000); 4],
            vec![Color(0x00ff_0000); 4],
            vec![Color::BLACK; 4],
        ]
    );
    assert_eq!(timer.waits.len(), 2);
    assert_eq!(driver.fini_calls, 1);
}

#[test]
fn test_shutdown_before_first_frame() {
    let shutdown = ShutdownToken::new();
    shutdown.request();

    let mut driver = MemoryDriver::new();
    let mut timer = ManualTimer::default();
    let result = run(
        config(3, true),
        &mut driver,
        &mut timer,
        Fill(Color(1)),
        shutdown,
    );
    assert_eq!(result, Ok(()));

    assert_eq!(driver.frames, vec![vec![Color::BLACK; 3]]);
    assert!(timer.waits.is_empty());
    assert_eq!(driver.fini_calls, 1);
}

#[test]
fn test_no_clear_without_option() {
    let shutdown = ShutdownToken::new();
    let mut driver = MemoryDriver::new().shutdown_after(1, shutdown.clone());
    let mut timer = ManualTimer::default();

    let result = run(config(3, false), &mut driver, &mut timer, Fill(Color(1)), shutdown);
    assert_eq!(result, Ok(()));
    assert_eq!(driver.frames, vec![vec![Color(1); 3]]);
}

#[test]
fn test_render_failure_stops_loop() {
    let shutdown = ShutdownToken::new();
    let mut driver = MemoryDriver::new().fail_render(1, DriverError::Dma);
    let mut timer = ManualTimer::default();

    let result = run(config(2, true), &mut driver, &mut timer, Fill(Color(1)), shutdown);
    assert_eq!(result, Err(Error::DriverRender(DriverError::Dma)));
    assert_eq!(result.unwrap_err().status_code(), -10);

    // The failed frame is followed by the clear frame and the teardown.
    assert_eq!(
        driver.frames,
        vec![
            vec![Color(1); 2],
            vec![Color(1); 2],
            vec![Color::BLACK; 2]
        ]
    );
    assert_eq!(timer.waits.len(), 1);
    assert_eq!(driver.fini_calls, 1);
}

#[test]
fn test_clear_failure_keeps_status() {
    let shutdown = ShutdownToken::new();
    let mut driver = MemoryDriver::new()
        .shutdown_after(2, shutdown.clone())
        .fail_render(2, DriverError::Generic);
    let mut timer = ManualTimer::default();

    let result = run(config(2, true), &mut driver, &mut timer, Fill(Color(1)), shutdown);
    assert_eq!(result, Ok(()));
    assert_eq!(driver.frames.len(), 3);
    assert_eq!(driver.fini_calls, 1);
}

#[test]
fn test_init_failure() {
    let mut driver = MemoryDriver::new().fail_init(DriverError::IllegalGpio);
    let mut timer = ManualTimer::default();

    let result = run(
        config(2, true),
        &mut driver,
        &mut timer,
        Fill(Color(1)),
        ShutdownToken::new(),
    );
    assert_eq!(result, Err(Error::DriverInit(DriverError::IllegalGpio)));
    assert_eq!(result.unwrap_err().status_code(), -11);

    assert!(driver.frames.is_empty());
    assert!(timer.waits.is_empty());
    assert_eq!((driver.init_calls, driver.fini_calls), (1, 0));
}

#[test]
fn test_animated_scene() {
    let shutdown = ShutdownToken::new();
    let mut driver = MemoryDriver::new().shutdown_after(3, shutdown.clone());
    let mut timer = ManualTimer::default();

    let color = Color::rgb(0, 64, 0);
    let result = run(
        config(3, false),
        &mut driver,
        &mut timer,
        WanderingLight::new(color),
        shutdown,
    );
    assert_eq!(result, Ok(()));

    let off = Color::BLACK;
    assert_eq!(
        driver.frames,
        vec![
            vec![off, color, off],
            vec![off, off, color],
            vec![color, off, color],
        ]
    );
}

#[test]
fn test_app_accessors() {
    let shutdown = ShutdownToken::new();
    let mut driver = MemoryDriver::new().shutdown_after(2, shutdown.clone());
    let mut timer = ManualTimer::default();

    let mut app = AppConfig {
        config: config(5, true),
        driver: &mut driver,
        timer: &mut timer,
        scene: Fill(Color(1)),
        shutdown,
    }
    .into_app();
    assert_eq!(app.matrix().len(), 5);

    app.run().unwrap();
    assert_eq!(app.stats().total_frames(), 2);
    assert_eq!(app.matrix().as_slice(), &[Color::BLACK; 5]);
}
