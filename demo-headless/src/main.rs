use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tire_calc_core::{
    calculate_circumference, calculate_circumference_tagged, calculate_revs, calculate_revs_tagged,
    calculate_sidewall_height, calculate_tire_height, list_tires_per_wheel_diameter,
    range_with_step, Diameter, HeightLimits, LinearUnit, SidewallUnit, TireDataForm, TireSpec,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tire size calculator
#[derive(Parser, Debug)]
#[command(name = "tire-calc")]
#[command(about = "Tire size calculator: heights, circumference, revs and size listings", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sidewall height from aspect ratio and width
    Sidewall {
        /// Aspect ratio in %
        #[arg(short, long)]
        aspect_ratio: f64,

        /// Section width in mm
        #[arg(short, long)]
        width: f64,

        /// Output unit (inch, mm)
        #[arg(short, long, default_value_t = SidewallUnit::Inch)]
        unit: SidewallUnit,
    },

    /// Overall tire height in inches
    Height {
        /// Section width in mm
        #[arg(short, long)]
        width: f64,

        /// Aspect ratio in %
        #[arg(short, long)]
        aspect_ratio: f64,

        /// Rim diameter in inches
        #[arg(short = 'd', long)]
        wheel_diameter: f64,
    },

    /// Rolling circumference of a diameter
    Circumference {
        /// Diameter value
        #[arg(short, long)]
        diameter: f64,

        /// Unit of the diameter (inch, cm)
        #[arg(long, default_value = "inch")]
        diameter_unit: String,

        /// Output unit (inch, cm)
        #[arg(short, long, default_value_t = LinearUnit::Inch)]
        unit: LinearUnit,
    },

    /// Revolutions per mile (inch circumference) or km (cm circumference)
    Revs {
        /// Circumference value
        #[arg(short, long)]
        value: f64,

        /// Unit of the circumference (inch, cm)
        #[arg(short, long, default_value = "inch")]
        unit: String,
    },

    /// Stepped integer range from start towards stop (exclusive)
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,

        #[arg(allow_negative_numbers = true)]
        stop: i64,

        /// Step (values below 1 give an empty range)
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,
    },

    /// List tire sizes fitting a rim within a height window
    List {
        /// Rim diameter in inches
        #[arg(short = 'd', long, default_value_t = 16.0)]
        wheel_diameter: f64,

        /// Smallest section width in mm
        #[arg(long, default_value_t = 155)]
        min_width: u32,

        /// Largest section width in mm
        #[arg(long, default_value_t = 275)]
        max_width: u32,

        /// Smallest aspect ratio in %
        #[arg(long, default_value_t = 30)]
        min_aspect_ratio: u32,

        /// Largest aspect ratio in %
        #[arg(long, default_value_t = 80)]
        max_aspect_ratio: u32,

        /// Overall height lower bound in inches (exclusive)
        #[arg(long, default_value_t = 24.0)]
        min_height: f64,

        /// Overall height upper bound in inches (exclusive)
        #[arg(long, default_value_t = 26.0)]
        max_height: f64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Sidewall {
            aspect_ratio,
            width,
            unit,
        } => {
            let height = calculate_sidewall_height(aspect_ratio, width, unit);
            println!("Sidewall height: {height:.2} {unit}");
        }
        Command::Height {
            width,
            aspect_ratio,
            wheel_diameter,
        } => {
            let height = calculate_tire_height(&TireSpec::new(width, aspect_ratio, wheel_diameter));
            println!("Tire height: {height:.2} inch");
        }
        Command::Circumference {
            diameter,
            diameter_unit,
            unit,
        } => {
            let circumference = calculate_circumference_tagged(diameter, &diameter_unit, unit);
            println!("Circumference: {circumference}");
        }
        Command::Revs { value, unit } => match calculate_revs_tagged(value, &unit) {
            Ok(revs) => println!("Revolutions: {revs}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        Command::Range { start, stop, step } => {
            let values: Vec<String> = range_with_step(start, stop, step)
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("[{}]", values.join(", "));
        }
        Command::List {
            wheel_diameter,
            min_width,
            max_width,
            min_aspect_ratio,
            max_aspect_ratio,
            min_height,
            max_height,
        } => {
            let min = TireDataForm::new(min_width, min_aspect_ratio, min_height);
            let max = TireDataForm::new(max_width, max_aspect_ratio, max_height);
            let limits = HeightLimits::from_forms(&min, &max);
            info!(?min, ?max, wheel_diameter, "listing tire sizes");

            let tires = list_tires_per_wheel_diameter(&min, &max, wheel_diameter, Some(limits));
            println!(
                "=== {} sizes for R{} between {:.2}\" and {:.2}\" ===\n",
                tires.len(),
                wheel_diameter,
                limits.min,
                limits.max
            );
            println!("{:<12} {:>10} {:>10} {:>12}", "Size", "Height", "Sidewall", "Revs/mile");
            for tire in &tires {
                let sidewall =
                    calculate_sidewall_height(tire.aspect_ratio(), tire.width(), SidewallUnit::Inch);
                let circumference = calculate_circumference(
                    &Diameter::new(tire.height(), LinearUnit::Inch),
                    LinearUnit::Inch,
                );
                let revs = calculate_revs(&circumference);
                let size = tire.to_string();
                println!(
                    "{:<12} {:>9.2}\" {:>9.2}\" {:>12.2}",
                    size,
                    tire.height(),
                    sidewall,
                    revs.value
                );
            }
        }
    }

    ExitCode::SUCCESS
}
