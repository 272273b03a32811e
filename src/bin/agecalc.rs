//! agecalc CLI - Command-line interface for the agecalc engine
//!
//! Commands:
//! - age: Compute the age snapshot for a birth date
//! - watch: Re-sample the snapshot on the profile's tick interval (NDJSON)
//! - body: Estimate BMI and height/weight percentiles
//! - zodiac: Look up the zodiac sign for a date
//! - config: Print the resolved configuration
//! - doctor: Diagnose configuration and environment

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use agecalc::anthropometry::{
    compute_anthropometrics, AnthropometricRequest, AnthropometricResult, Gender, HeightUnit,
    WeightUnit,
};
use agecalc::calendar::parse_date;
use agecalc::config::{AgeConfig, ProfileSettings, CONFIG_FILE};
use agecalc::encoder::SNAPSHOT_SCHEMA_VERSION;
use agecalc::error::{ComputeError, ConfigError, InvalidReason, MissingField};
use agecalc::ffi::INSTANT_FORMAT;
use agecalc::metrics::zodiac_sign;
use agecalc::types::{AgeSnapshot, BirthDate};
use agecalc::{compute_age_snapshot, SnapshotProcessor, AGECALC_VERSION, PRODUCER_NAME};

/// agecalc - Calendar-correct age and birthday engine
#[derive(Parser)]
#[command(name = "agecalc")]
#[command(version = AGECALC_VERSION)]
#[command(about = "Compute age, birthday countdowns and body estimates", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./agecalc.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the age snapshot for a birth date
    Age {
        /// Birth date (YYYY-MM-DD)
        birth_date: String,

        /// Reference instant (YYYY-MM-DDTHH:MM:SS, defaults to the local clock)
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(long, default_value = "auto")]
        format: OutputFormat,
    },

    /// Re-sample the snapshot on the profile's tick interval
    Watch {
        /// Birth date (YYYY-MM-DD)
        birth_date: String,

        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Estimate BMI and height/weight percentiles
    Body {
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,

        /// Height in the chosen unit (decimal feet for ft)
        #[arg(long)]
        height: Option<f64>,

        #[arg(long, default_value = "cm")]
        height_unit: HeightUnitArg,

        /// Weight in the chosen unit
        #[arg(long)]
        weight: Option<f64>,

        #[arg(long, default_value = "kg")]
        weight_unit: WeightUnitArg,

        /// Completed years of age
        #[arg(long, conflicts_with = "birth_date")]
        age: Option<u32>,

        /// Derive the age from a birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the zodiac sign for a date
    Zodiac {
        /// Date as YYYY-MM-DD or MM-DD
        date: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved configuration
    Config,

    /// Diagnose configuration and environment
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, PartialEq, ValueEnum)]
enum OutputFormat {
    /// Text on a terminal, JSON when piped
    Auto,
    /// Human-readable report
    Text,
    /// Snapshot as compact JSON
    Json,
    /// Snapshot as pretty-printed JSON
    JsonPretty,
    /// Snapshot wrapped in the producer envelope
    Envelope,
    /// Multi-line summary suitable for the clipboard
    Copy,
    /// One-line summary suitable for sharing
    Share,
}

#[derive(Clone, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

#[derive(Clone, ValueEnum)]
enum HeightUnitArg {
    Cm,
    Ft,
}

#[derive(Clone, ValueEnum)]
enum WeightUnitArg {
    Kg,
    Lbs,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

impl From<HeightUnitArg> for HeightUnit {
    fn from(arg: HeightUnitArg) -> Self {
        match arg {
            HeightUnitArg::Cm => HeightUnit::Cm,
            HeightUnitArg::Ft => HeightUnit::Ft,
        }
    }
}

impl From<WeightUnitArg> for WeightUnit {
    fn from(arg: WeightUnitArg) -> Self {
        match arg {
            WeightUnitArg::Kg => WeightUnit::Kg,
            WeightUnitArg::Lbs => WeightUnit::Lbs,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGECALC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), AgeCliError> {
    // Doctor reports configuration problems instead of failing on them.
    if let Commands::Doctor { json } = cli.command {
        return cmd_doctor(cli.config.as_deref(), json);
    }

    let config = load_config(cli.config.as_deref())?;
    dispatch(cli.command, &config)
}

fn dispatch(command: Commands, config: &AgeConfig) -> Result<(), AgeCliError> {
    match command {
        Commands::Age {
            birth_date,
            now,
            format,
        } => cmd_age(&birth_date, now.as_deref(), format, config),
        Commands::Watch { birth_date, ticks } => cmd_watch(&birth_date, ticks, config),
        Commands::Body {
            gender,
            height,
            height_unit,
            weight,
            weight_unit,
            age,
            birth_date,
            json,
        } => {
            let mut request = AnthropometricRequest {
                gender: gender.map(Gender::from),
                height,
                height_unit: height_unit.into(),
                weight,
                weight_unit: weight_unit.into(),
                age_years: age.unwrap_or(0),
            };
            if let Some(raw) = birth_date {
                let now = local_now();
                let birth = BirthDate::parse(Some(&raw), now)?;
                request = request.with_birth_date(birth.date(), now);
            }
            cmd_body(&request, json)
        }
        Commands::Zodiac { date, json } => cmd_zodiac(&date, json),
        Commands::Config => cmd_config(config),
        Commands::Doctor { json } => cmd_doctor(None, json),
    }
}

fn load_config(path: Option<&Path>) -> Result<AgeConfig, AgeCliError> {
    let config = match path {
        Some(path) => AgeConfig::load_from(path)?,
        None => AgeConfig::load()?,
    };
    Ok(config)
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn parse_now(raw: Option<&str>) -> Result<NaiveDateTime, AgeCliError> {
    match raw {
        Some(raw) => NaiveDateTime::parse_from_str(raw.trim(), INSTANT_FORMAT).map_err(|e| {
            AgeCliError::ParseError(format!("Invalid reference instant '{}': {}", raw, e))
        }),
        None => Ok(local_now()),
    }
}

fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn cmd_age(
    raw_birth_date: &str,
    raw_now: Option<&str>,
    format: OutputFormat,
    config: &AgeConfig,
) -> Result<(), AgeCliError> {
    let now = parse_now(raw_now)?;
    let birth = BirthDate::parse(Some(raw_birth_date), now)?;
    let processor = SnapshotProcessor::with_config(config);
    let snapshot = processor.tick(&birth, now);

    let format = match format {
        OutputFormat::Auto if stdout_is_tty() => OutputFormat::Text,
        OutputFormat::Auto => OutputFormat::Json,
        other => other,
    };

    let output = match format {
        OutputFormat::Text | OutputFormat::Auto => render_report(&snapshot, processor.settings()),
        OutputFormat::Json => serde_json::to_string(&snapshot)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&snapshot)?,
        OutputFormat::Envelope => processor.encoder().encode_to_json_pretty(&snapshot)?,
        OutputFormat::Copy => copy_text(&snapshot),
        OutputFormat::Share => share_text(&snapshot),
    };

    println!("{}", output);
    Ok(())
}

fn cmd_watch(
    raw_birth_date: &str,
    ticks: Option<u64>,
    config: &AgeConfig,
) -> Result<(), AgeCliError> {
    let processor = SnapshotProcessor::with_config(config);
    let birth = BirthDate::parse(Some(raw_birth_date), local_now())?;
    let stdout = io::stdout();
    let mut count = 0u64;

    tracing::info!(
        instance_id = processor.encoder().instance_id(),
        interval_ms = processor.settings().tick_interval_ms,
        "watch started"
    );

    loop {
        // Sample the clock once per tick so every value in the frame agrees.
        let frame = processor.tick_json(&birth, local_now())?;
        {
            let mut out = stdout.lock();
            writeln!(out, "{}", frame)?;
            out.flush()?;
        }

        count += 1;
        if ticks.is_some_and(|limit| count >= limit) {
            return Ok(());
        }
        thread::sleep(processor.tick_interval());
    }
}

fn cmd_body(request: &AnthropometricRequest, json: bool) -> Result<(), AgeCliError> {
    let result = compute_anthropometrics(request)?;

    if json || !stdout_is_tty() {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_body(&result));
    }
    Ok(())
}

fn cmd_zodiac(raw: &str, json: bool) -> Result<(), AgeCliError> {
    let (month, day) = parse_month_day(raw)?;
    let sign = zodiac_sign(month, day);

    if json {
        println!("{}", serde_json::to_string_pretty(sign)?);
    } else {
        println!("{} {} ({})", sign.icon, sign.name, sign.range_label());
    }
    Ok(())
}

fn cmd_config(config: &AgeConfig) -> Result<(), AgeCliError> {
    let resolved = ResolvedConfig {
        config: config.clone(),
        settings: config.settings(),
    };
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn cmd_doctor(config_path: Option<&Path>, json: bool) -> Result<(), AgeCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "agecalc_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("agecalc version {}", AGECALC_VERSION),
    });

    checks.push(DoctorCheck {
        name: "schema_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Snapshot schema: {}", SNAPSHOT_SCHEMA_VERSION),
    });

    // Check the configuration file and the merged result
    let file = config_path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    if file.exists() {
        checks.push(DoctorCheck {
            name: "config_file".to_string(),
            status: CheckStatus::Ok,
            message: format!("Using {}", file.display()),
        });
    } else {
        checks.push(DoctorCheck {
            name: "config_file".to_string(),
            status: if config_path.is_some() {
                CheckStatus::Error
            } else {
                CheckStatus::Warning
            },
            message: format!("{} not found, using defaults", file.display()),
        });
    }

    match load_config(config_path) {
        Ok(config) => {
            let settings = config.settings();
            checks.push(DoctorCheck {
                name: "config".to_string(),
                status: CheckStatus::Ok,
                message: format!(
                    "profile {:?}, tick {}ms, debounce {}ms",
                    config.profile, settings.tick_interval_ms, config.debounce_ms
                ),
            });
        }
        Err(e) => {
            checks.push(DoctorCheck {
                name: "config".to_string(),
                status: CheckStatus::Error,
                message: CliError::from(e).message,
            });
        }
    }

    let now = local_now();
    checks.push(DoctorCheck {
        name: "clock".to_string(),
        status: CheckStatus::Ok,
        message: format!("Local time {}", now.format(INSTANT_FORMAT)),
    });

    let stdout_check = if stdout_is_tty() {
        DoctorCheck {
            name: "stdout".to_string(),
            status: CheckStatus::Ok,
            message: "stdout is a TTY (text output)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdout".to_string(),
            status: CheckStatus::Ok,
            message: "stdout is a pipe (JSON output)".to_string(),
        }
    };
    checks.push(stdout_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: AGECALC_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("agecalc Doctor Report");
        println!("=====================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(AgeCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

// Parsing helpers

fn parse_month_day(raw: &str) -> Result<(u32, u32), AgeCliError> {
    let raw = raw.trim();
    if let Some(date) = parse_date(raw) {
        return Ok((date.month(), date.day()));
    }

    let invalid = || AgeCliError::ParseError(format!("Invalid date '{}'", raw));
    let (month, day) = raw.split_once('-').ok_or_else(invalid)?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    // 2000 is a leap year, so 02-29 is accepted.
    NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;
    Ok((month, day))
}

// Text rendering

fn human_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

fn render_report(snapshot: &AgeSnapshot, settings: &ProfileSettings) -> String {
    let mut lines = Vec::new();
    let age = &snapshot.age;
    let totals = &snapshot.totals;
    let next = &snapshot.next_birthday;
    let countdown = &snapshot.countdown;

    lines.push(format!(
        "Age:           {} years, {} months, {} days",
        age.years, age.months, age.days
    ));
    lines.push(format!(
        "Total lived:   {} days, {} hours, {} minutes, {} seconds",
        grouped(totals.total_days),
        grouped(totals.total_hours),
        grouped(totals.total_minutes),
        grouped(totals.total_seconds)
    ));
    lines.push(format!(
        "Next birthday: {} ({}), {} days left, turning {}",
        human_date(next.date),
        next.weekday,
        next.days_left,
        snapshot.turning_age
    ));
    lines.push(format!(
        "Countdown:     {}d {}h {}m {}s",
        countdown.days, countdown.hours, countdown.minutes, countdown.seconds
    ));
    lines.push(format!(
        "Zodiac:        {} {} ({})",
        snapshot.zodiac.icon,
        snapshot.zodiac.name,
        snapshot.zodiac.range_label()
    ));
    lines.push(format!("Life progress: {:.1}%", snapshot.life_progress_pct));

    lines.push(String::new());
    lines.push("Upcoming milestones:".to_string());
    for milestone in &snapshot.milestones {
        lines.push(format!(
            "  {:>3}  {} ({} years left)",
            milestone.age, milestone.name, milestone.years_left
        ));
    }

    let unlocked = snapshot.achievements.iter().filter(|a| a.unlocked).count();
    lines.push(String::new());
    lines.push(format!(
        "Achievements ({}/{} unlocked):",
        unlocked,
        snapshot.achievements.len()
    ));
    for achievement in snapshot.achievements.iter().take(settings.achievements_shown) {
        let mark = if achievement.unlocked { "[x]" } else { "[ ]" };
        lines.push(format!(
            "  {} {} {} - {}",
            mark, achievement.icon, achievement.name, achievement.description
        ));
    }

    lines.push(String::new());
    lines.push("Timeline:".to_string());
    for event in snapshot.timeline.iter().take(settings.timeline_shown) {
        lines.push(format!(
            "  {}  {:<6} {}",
            event.date,
            format!("{:?}", event.status).to_lowercase(),
            event.label
        ));
    }

    lines.join("\n")
}

fn copy_text(snapshot: &AgeSnapshot) -> String {
    let age = &snapshot.age;
    let totals = &snapshot.totals;
    let next = &snapshot.next_birthday;
    format!(
        "My age is {} years, {} months, and {} days.\n\
         Zodiac Sign: {}\n\
         Total lived: {} hours, {} minutes, {} seconds.\n\
         Next birthday: {} ({}), {} days left.",
        age.years,
        age.months,
        age.days,
        snapshot.zodiac.name,
        grouped(totals.total_hours),
        grouped(totals.total_minutes),
        grouped(totals.total_seconds),
        human_date(next.date),
        next.weekday,
        next.days_left
    )
}

fn share_text(snapshot: &AgeSnapshot) -> String {
    let age = &snapshot.age;
    let next = &snapshot.next_birthday;
    format!(
        "I am {} years, {} months, and {} days old. Zodiac: {}. Next birthday: {} ({} days left).",
        age.years,
        age.months,
        age.days,
        snapshot.zodiac.name,
        human_date(next.date),
        next.days_left
    )
}

fn render_body(result: &AnthropometricResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "BMI:               {:.1} ({})\n",
        result.bmi,
        result.bmi_category.label()
    ));
    out.push_str(&format!(
        "Height percentile: {:.0} ({})\n",
        result.height_percentile,
        result.height_status.label()
    ));
    out.push_str(&format!(
        "Weight percentile: {:.0} ({})\n",
        result.weight_percentile,
        result.weight_status.label()
    ));
    out.push_str("\nRecommendations:\n");
    for line in &result.recommendations {
        out.push_str(&format!("  - {}\n", line));
    }
    out
}

// Error types

#[derive(Debug)]
enum AgeCliError {
    Io(io::Error),
    Compute(ComputeError),
    InvalidDate(InvalidReason),
    MissingField(MissingField),
    Config(ConfigError),
    Json(serde_json::Error),
    DoctorFailed,
    ParseError(String),
}

impl From<io::Error> for AgeCliError {
    fn from(e: io::Error) -> Self {
        AgeCliError::Io(e)
    }
}

impl From<ComputeError> for AgeCliError {
    fn from(e: ComputeError) -> Self {
        match e {
            ComputeError::InvalidBirthDate(reason) => AgeCliError::InvalidDate(reason),
            ComputeError::MissingField(missing) => AgeCliError::MissingField(missing),
            other => AgeCliError::Compute(other),
        }
    }
}

impl From<InvalidReason> for AgeCliError {
    fn from(e: InvalidReason) -> Self {
        AgeCliError::InvalidDate(e)
    }
}

impl From<MissingField> for AgeCliError {
    fn from(e: MissingField) -> Self {
        AgeCliError::MissingField(e)
    }
}

impl From<ConfigError> for AgeCliError {
    fn from(e: ConfigError) -> Self {
        AgeCliError::Config(e)
    }
}

impl From<serde_json::Error> for AgeCliError {
    fn from(e: serde_json::Error) -> Self {
        AgeCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<AgeCliError> for CliError {
    fn from(e: AgeCliError) -> Self {
        match e {
            AgeCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check that stdout is writable".to_string()),
            },
            AgeCliError::Compute(e) => CliError {
                code: "COMPUTE_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            AgeCliError::InvalidDate(reason) => CliError {
                code: format!("INVALID_DATE_{}", reason.as_str().to_uppercase()),
                message: reason.to_string(),
                hint: Some("Pass the birth date as YYYY-MM-DD".to_string()),
            },
            AgeCliError::MissingField(missing) => CliError {
                code: "MISSING_FIELD".to_string(),
                message: missing.to_string(),
                hint: Some(format!("Pass --{}", missing.0.as_str())),
            },
            AgeCliError::Config(e) => CliError {
                code: "CONFIG_ERROR".to_string(),
                message: e.to_string(),
                hint: Some(format!("Check {} and AGECALC_* variables", CONFIG_FILE)),
            },
            AgeCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            AgeCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
            AgeCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some("Check input format".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ResolvedConfig {
    config: AgeConfig,
    settings: ProfileSettings,
}

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot() -> AgeSnapshot {
        let now = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let birth = BirthDate::parse(Some("1990-05-20"), now).unwrap();
        compute_age_snapshot(&birth, now)
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(1234567), "1,234,567");
        assert_eq!(grouped(-1234), "-1,234");
    }

    #[test]
    fn test_parse_month_day() {
        assert_eq!(parse_month_day("1990-05-20").unwrap(), (5, 20));
        assert_eq!(parse_month_day("02-29").unwrap(), (2, 29));
        assert!(parse_month_day("02-30").is_err());
        assert!(parse_month_day("spring").is_err());
    }

    #[test]
    fn test_share_text() {
        assert_eq!(
            share_text(&snapshot()),
            "I am 33 years, 9 months, and 19 days old. Zodiac: Taurus. Next birthday: May 20, 2024 (71 days left)."
        );
    }

    #[test]
    fn test_copy_text_mentions_weekday() {
        let text = copy_text(&snapshot());
        assert!(text.starts_with("My age is 33 years, 9 months, and 19 days.\n"));
        assert!(text.ends_with("Next birthday: May 20, 2024 (Monday), 71 days left."));
    }

    #[test]
    fn test_report_respects_profile() {
        let compact = agecalc::DisplayProfile::Compact.settings();
        let report = render_report(&snapshot(), &compact);
        let achievement_lines = report
            .lines()
            .filter(|l| l.contains("[x]") || l.contains("[ ]"))
            .count();
        assert_eq!(achievement_lines, 4);
    }

    #[test]
    fn test_invalid_date_error_code() {
        let err = CliError::from(AgeCliError::InvalidDate(InvalidReason::FutureDate));
        assert_eq!(err.code, "INVALID_DATE_FUTURE_DATE");
    }
}
