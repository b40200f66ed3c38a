use crate::export::ExportFormat;
use crate::models::nap_record::NapType;
use crate::models::questionnaire::{Malaise, Restorative, WakeFeeling};
use crate::models::user_settings::{ThemePreference, TimeFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSleepManager
/// CLI application to track sleep and manage sleep debt with SQLite
#[derive(Parser)]
#[command(
    name = "rsleepmanager",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple sleep tracking CLI: log nights, manage sleep debt and plan bedtimes around full sleep cycles",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, configuration and your sleep profile
    Init {
        /// Your age; the recommended sleep duration is derived from it
        #[arg(long)]
        age: Option<u32>,

        /// Sleep cycle duration in minutes (60-120, default 90)
        #[arg(long = "cycle", help = "Sleep cycle duration in minutes (60-120)")]
        cycle_duration: Option<i64>,

        /// Minutes you typically need to fall asleep (0-120, default 15)
        #[arg(long = "fall-asleep", help = "Minutes needed to fall asleep (0-120)")]
        fall_asleep_time: Option<i64>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// View or update your sleep profile
    Settings {
        #[arg(long, help = "Update your age (recomputes the recommended sleep duration)")]
        age: Option<u32>,

        #[arg(long = "cycle", help = "Sleep cycle duration in minutes (60-120)")]
        cycle_duration: Option<i64>,

        #[arg(long = "fall-asleep", help = "Minutes needed to fall asleep (0-120)")]
        fall_asleep_time: Option<i64>,

        #[arg(long = "ideal-hours", help = "Target sleep duration per night (4-12 hours)")]
        ideal_sleep_hours: Option<f64>,

        #[arg(long = "time-format", value_enum, help = "Clock display: 12h or 24h")]
        time_format: Option<TimeFormat>,

        #[arg(long = "theme", value_enum, help = "Theme preference: light or dark")]
        theme: Option<ThemePreference>,

        /// Apply the cycle duration suggested by your wake quality ratings
        #[arg(long = "apply-optimized")]
        apply_optimized: bool,
    },

    /// Log a night of sleep
    Log {
        /// Wake-up date (YYYY-MM-DD, default today)
        date: Option<String>,

        /// Bedtime (HH:MM); at or after the wake time means the previous day
        #[arg(long = "bed", help = "Bedtime (HH:MM)")]
        bedtime: String,

        /// Wake-up time (HH:MM)
        #[arg(long = "wake", help = "Wake-up time (HH:MM)")]
        wake: String,

        /// Minutes needed to fall asleep last night (default: profile value)
        #[arg(long = "fall-asleep")]
        fall_asleep: Option<i64>,

        /// Wake quality rating (1-5)
        #[arg(long)]
        rating: Option<u8>,

        #[arg(long)]
        notes: Option<String>,

        /// Mark this night as a damage-control emergency sleep
        #[arg(long = "damage-control")]
        damage_control: bool,
    },

    /// Rate how you felt waking up this morning
    Checkin {
        /// Wake quality rating (1-5)
        #[arg(long)]
        rating: u8,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Log a nap (power = 20 min, cycle = 90 min)
    Nap {
        /// Nap type
        #[arg(value_enum)]
        kind: NapType,

        /// Start time (HH:MM, default now); far-future times mean yesterday
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Plan tonight's bedtime for complete sleep cycles
    Plan {
        /// Target wake-up time (HH:MM); earlier than now means tomorrow
        #[arg(long = "wake", help = "Target wake-up time (HH:MM)")]
        wake: String,

        /// Number of complete cycles (default: derived from your ideal sleep)
        #[arg(long)]
        cycles: Option<i64>,
    },

    /// Already sleep-deprived? Get the best achievable sleep window now
    DamageControl {
        /// Hard wake deadline (HH:MM); earlier than now means tomorrow
        #[arg(long = "wake", help = "Hard wake deadline (HH:MM)")]
        wake: String,
    },

    /// Show current sleep debt, its severity and recovery guidance
    Debt {
        /// Show recovery plans sized to the current debt
        #[arg(long)]
        plans: bool,

        /// Show personalized pattern insights
        #[arg(long)]
        insights: bool,
    },

    /// List logged nights with summary statistics
    List {
        /// Trailing window in days
        #[arg(long, default_value_t = 30)]
        days: i64,

        /// Include notes and per-night detail
        #[arg(long)]
        details: bool,
    },

    /// Submit the weekly fatigue questionnaire
    Questionnaire {
        #[arg(long, value_enum, help = "How you typically felt when waking up this week")]
        waking: WakeFeeling,

        #[arg(long, value_enum, help = "Does your sleep feel restorative?")]
        restorative: Restorative,

        #[arg(long, value_enum, help = "Unusual tiredness after moderate activities")]
        malaise: Malaise,

        #[arg(
            long = "tired-days",
            help = "Days this week you were too tired for normal activities (0-7)"
        )]
        tired_days: u8,

        /// Difficulty concentrating or remembering things
        #[arg(long)]
        concentration: bool,
    },

    /// Delete a sleep record by id
    Del {
        /// Record id (see `list --details`)
        id: String,
    },

    /// Export sleep data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Delete all stored data and start over
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
