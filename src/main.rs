use amduong::adapters::StaticHolidayTable;
use amduong::app::render;
use amduong::config::{CliConfig, Command};
use amduong::utils::{logger, validation::Validate};
use amduong::{
    reduce, BirthRef, CalendarGridBuilder, LunarDate, LunarSolarConverter, MainMode,
    ScheduleCalculator, SolarDate, ViewAction, ViewState,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let showing_grid = matches!(config.command, Command::Grid { .. });
    match run(&config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        // Never show a partial grid; any failure while building one falls
        // back to the localized message.
        Err(e) if showing_grid => {
            tracing::error!("Grid build failed: {}", e);
            eprintln!("Không thể hiển thị lịch cho tháng này. Vui lòng chọn tháng khác.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Có lỗi khi tính toán ngày. Vui lòng thử lại hoặc chọn ngày khác.");
            Err(e.into())
        }
    }
}

fn run(config: &CliConfig) -> amduong::Result<String> {
    match config.command {
        Command::Grid {
            year,
            month,
            lunar_led,
            select,
        } => {
            let mode = if lunar_led {
                MainMode::LunarLed
            } else {
                MainMode::SolarLed
            };
            let today = SolarDate::from(chrono::Local::now().date_naive());
            let mut state = ViewState::new(year, month, mode);
            if let Some(day) = select {
                state = reduce(state, ViewAction::Select { day });
            }
            let builder = CalendarGridBuilder::new(StaticHolidayTable::new());
            let grid = builder.build_month_grid(
                state.year,
                state.month,
                state.mode,
                today,
                state.selected,
            )?;
            if config.json {
                Ok(serde_json::to_string_pretty(&grid)?)
            } else {
                Ok(render::render_grid(&grid, state.year, state.month, state.mode))
            }
        }
        Command::Schedule {
            year,
            month,
            day,
            lunar,
            leap,
        } => {
            let birth_ref = if lunar {
                BirthRef::Lunar(LunarDate::new(year, month, day, leap))
            } else {
                BirthRef::Solar(SolarDate::new(year, month, day)?)
            };
            let result = ScheduleCalculator::new().compute_schedule(birth_ref)?;
            if config.json {
                Ok(serde_json::to_string_pretty(&result)?)
            } else {
                render::render_schedule(&result, &LunarSolarConverter::new())
            }
        }
        Command::Convert {
            year,
            month,
            day,
            from_lunar,
            leap,
        } => {
            let converter = LunarSolarConverter::new();
            let (solar, lunar) = if from_lunar {
                let lunar = LunarDate::new(year, month, day, leap);
                (converter.lunar_to_solar(lunar)?, lunar)
            } else {
                let solar = SolarDate::new(year, month, day)?;
                (solar, converter.solar_to_lunar(solar)?)
            };
            if config.json {
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "solar": solar,
                    "lunar": lunar,
                }))?)
            } else {
                Ok(amduong::utils::format::format_date_pair(solar, lunar))
            }
        }
    }
}
