//! Litra Beam CLI tool.

use std::process;

use anyhow::{bail, Context, Result};
use clap::{
    crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ArgMatches, Command,
};
use litra::{DeviceDescriptor, Light, Litra};

mod udev;

/// Color temperature request.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum Temperature {
    Kelvin(i32),
    Percent(i32),
}

/// Requested actions.
#[derive(Default, PartialEq, Eq, Debug)]
struct Config {
    device: Option<String>,
    list: bool,
    paths_only: bool,
    power: Option<bool>,
    brightness: Option<i32>,
    temperature: Option<Temperature>,
    build_udev_rules: bool,
    user: Option<String>,
}

impl Config {
    fn from_cli(matches: &ArgMatches) -> Self {
        let mut config = Config {
            device: matches.get_one::<String>("device").cloned(),
            list: matches.get_flag("list"),
            paths_only: matches.get_flag("paths-only"),
            brightness: matches.get_one::<i32>("brightness").copied(),
            build_udev_rules: matches.get_flag("build-udev-rules"),
            user: matches.get_one::<String>("user").cloned(),
            ..Default::default()
        };

        // On takes precedence over off.
        if matches.get_flag("on") {
            config.power = Some(true);
        } else if matches.get_flag("off") {
            config.power = Some(false);
        }

        // Kelvin takes precedence over percentage.
        config.temperature = matches
            .get_one::<i32>("temperature")
            .map(|&kelvin| Temperature::Kelvin(kelvin))
            .or_else(|| {
                matches.get_one::<i32>("temperature-percent").map(|&pct| Temperature::Percent(pct))
            });

        config
    }

    /// Check if no option was provided at all.
    fn is_empty(&self) -> bool {
        !self.list
            && !self.paths_only
            && self.device.is_none()
            && self.power.is_none()
            && self.brightness.is_none()
            && self.temperature.is_none()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = Config::from_cli(&cli().get_matches());

    if !config.build_udev_rules && config.is_empty() {
        println!("No options provided. Discovering Litra Beams...");
        config.list = true;
    }

    if let Err(err) = run(&config) {
        eprintln!("\x1b[31mError:\x1b[0m {err:?}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    if config.build_udev_rules {
        let rule = udev::install(config.user.as_deref())?;
        println!("Wrote udev rules @ {}. Rule:\n{}", udev::RULES_PATH, rule);
        return Ok(());
    }

    let litra = Litra::new();

    let serial_number = match &config.device {
        Some(serial_number) if !config.list && !config.paths_only => {
            let device = litra.open_by_identity(serial_number).with_context(|| {
                format!("unable to discover device by serial number {serial_number}")
            })?;
            device.serial_number().to_owned()
        },
        _ => {
            let devices = litra.discover().context("unable to get connected devices")?;
            if devices.is_empty() {
                bail!("no Litra Beam devices found");
            }

            if config.list {
                print_device_list(&devices);
                return Ok(());
            } else if config.paths_only {
                print_paths_only(&devices);
                return Ok(());
            }

            devices[0].serial_number().to_owned()
        },
    };

    apply(config, &litra.beam(serial_number))
}

/// Apply the requested changes to a light.
fn apply(config: &Config, light: &impl Light) -> Result<()> {
    if let Some(brightness) = config.brightness {
        light.set_brightness(brightness).context("unable to set brightness")?;
    }

    match config.temperature {
        Some(Temperature::Kelvin(kelvin)) => {
            light.set_temperature(kelvin).context("unable to set temperature")?
        },
        Some(Temperature::Percent(percent)) => light
            .set_temperature_percentage(percent)
            .context("unable to set temperature by percentage")?,
        None => (),
    }

    match config.power {
        Some(true) => light.on().context("unable to turn on device")?,
        Some(false) => light.off().context("unable to turn off device")?,
        None => (),
    }

    Ok(())
}

fn print_device_list(devices: &[DeviceDescriptor]) {
    println!("Discovered Litra Beams:");
    for device in devices {
        println!(
            "{}, Product: {}, Firmware: {}",
            device,
            device.product_string(),
            device.release_number()
        );
    }
}

fn print_paths_only(devices: &[DeviceDescriptor]) {
    for device in devices {
        println!("{}", device.path());
    }
}

/// Get clap CLI parameters.
fn cli() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("list")
                .help("List the discovered lights by serial number and path, then exit")
                .long("list")
                .short('l')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("paths-only")
                .help("Print just the device paths and exit, used by the udev rule")
                .long("paths-only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("device")
                .help("Serial number of the light to control [default: first light discovered]")
                .long("device")
                .short('d')
                .env("LITRA_DEVICE"),
        )
        .arg(
            Arg::new("on")
                .help("Turn the light on")
                .long("on")
                .action(ArgAction::SetTrue)
                .conflicts_with("off"),
        )
        .arg(Arg::new("off").help("Turn the light off").long("off").action(ArgAction::SetTrue))
        .arg(
            Arg::new("brightness")
                .help("Brightness level [possible values: 0..=100]")
                .long("brightness")
                .short('b')
                .value_parser(value_parser!(i32).range(0..=100)),
        )
        .arg(
            Arg::new("temperature")
                .help("Color temperature in Kelvin [possible values: 2700..=6500]")
                .long("temperature")
                .short('t')
                .value_parser(value_parser!(i32).range(2700..=6500))
                .conflicts_with("temperature-percent"),
        )
        .arg(
            Arg::new("temperature-percent")
                .help("Color temperature as percentage [possible values: 0..=100]")
                .long("temperature-percent")
                .value_parser(value_parser!(i32).range(0..=100)),
        )
        .arg(
            Arg::new("build-udev-rules")
                .help("Build and install udev rules, then exit (Linux only)")
                .long("build-udev-rules")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("user")
                .help("User to install udev rules for, usually $USER")
                .long("user")
                .requires("build-udev-rules"),
        )
}
