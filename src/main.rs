use clap::Parser;
use resistor_kit::utils::{format::trim_decimals, logger, validation::Validate};
use resistor_kit::{
    decode_capacitor, decode_names, decode_smd, divider_output, divider_required_r2, encode,
    find_nearest, format_resistance, led_resistor, run_batch_file, solve_ohms_law, BandCount,
    CliConfig, Command, ConfigProvider, OhmsLawInput, OutputFormat, ResistorError, Result,
    TomlConfig,
};
use serde::Serialize;

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}

fn run(command: Command, config: &TomlConfig, format: OutputFormat) -> Result<()> {
    match command {
        Command::Decode { colors, bands } => {
            let band_count = BandCount::for_decode(bands, colors.len(), config.default_band_count())?;
            let reading = decode_names(&colors, band_count)?;
            emit(format, &reading, || {
                let mut line = format!(
                    "{} ±{}%",
                    format_resistance(reading.ohms),
                    trim_decimals(reading.tolerance_percent, 2)
                );
                if let Some(ppm) = reading.temp_coeff_ppm {
                    line.push_str(&format!(" {}ppm/K", ppm));
                }
                line
            })
        }
        Command::Encode { ohms, bands } => {
            let band_count = BandCount::for_encode(bands, config.default_band_count())?;
            let colors = encode(ohms, band_count)?;
            if colors.is_empty() {
                tracing::warn!("Resistance must be positive to have color bands");
            }
            emit(format, &colors, || {
                colors
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
        }
        Command::Nearest { ohms, series } => {
            let series = series.unwrap_or_else(|| config.default_series());
            let nearest = find_nearest(ohms, series);
            emit(format, &nearest, || {
                if nearest.is_exact {
                    format!("{} ({}, exact)", format_resistance(nearest.value), series)
                } else {
                    format!(
                        "{} ({}, off by {})",
                        format_resistance(nearest.value),
                        series,
                        format_resistance(nearest.absolute_difference)
                    )
                }
            })
        }
        Command::Smd { code } => {
            let ohms = decode_smd(&code)?;
            let value = serde_json::json!({ "code": code, "ohms": ohms });
            emit(format, &value, || format_resistance(ohms))
        }
        Command::Cap { code } => {
            let reading = decode_capacitor(&code)?;
            emit(format, &reading, || reading.display.clone())
        }
        Command::Ohms {
            volts,
            amps,
            ohms,
            watts,
        } => {
            let result = solve_ohms_law(OhmsLawInput {
                volts,
                amps,
                ohms,
                watts,
            })?;
            emit(format, &result, || {
                format!(
                    "V = {} V\nI = {} A\nR = {}\nP = {} W",
                    trim_decimals(result.volts, 4),
                    trim_decimals(result.amps, 4),
                    format_resistance(result.ohms),
                    trim_decimals(result.watts, 4)
                )
            })
        }
        Command::Led {
            supply,
            forward,
            current_ma,
        } => {
            let led = led_resistor(supply, forward, current_ma / 1000.0)?;
            emit(format, &led, || {
                format!(
                    "R = {} (use {} from E24), P = {} mW",
                    format_resistance(led.ohms),
                    format_resistance(led.nearest_e24),
                    trim_decimals(led.watts * 1000.0, 1)
                )
            })
        }
        Command::Divider { vin, r1, r2, vout } => match (r2, vout) {
            (Some(r2), _) => {
                let out = divider_output(vin, r1, r2);
                let value = serde_json::json!({ "vout": out });
                emit(format, &value, || format!("Vout = {} V", trim_decimals(out, 4)))
            }
            (None, Some(vout)) => {
                let solution = divider_required_r2(vin, vout, r1)?;
                emit(format, &solution, || {
                    format!(
                        "R2 = {} (use {} from E24 for {} V)",
                        format_resistance(solution.r2),
                        format_resistance(solution.nearest_e24),
                        trim_decimals(solution.actual_vout, 3)
                    )
                })
            }
            (None, None) => Err(ResistorError::MissingConfigError {
                field: "r2 or vout".to_string(),
            }),
        },
        Command::Batch {
            input,
            output,
            series,
        } => {
            let series = series.unwrap_or_else(|| config.default_series());
            let summary = run_batch_file(&input, &output, series)?;
            emit(format, &summary, || {
                format!(
                    "✅ {} rows ({} exact) written to {}",
                    summary.rows,
                    summary.exact,
                    output.display()
                )
            })
        }
    }
}

fn main() {
    let cli = CliConfig::parse();

    let config = match TomlConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level(), config.json_logs());
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output_format()
    };

    if let Err(e) = run(cli.command, &config, format) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
