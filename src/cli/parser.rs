use crate::export::ExportFormat;
use crate::models::Id;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rVolunteer
/// CLI application to coordinate volunteer events in memory
#[derive(Parser, Debug)]
#[command(
    name = "rvolunteer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Coordinate volunteer events: events, duties, shifts, volunteers and attendance",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Start with an empty store instead of the demonstration dataset
    #[arg(global = true, long = "no-seed")]
    pub no_seed: bool,

    /// Print records as JSON instead of tables
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// One line read by the `shell` command. Same commands, no binary name.
#[derive(Parser, Debug)]
#[command(name = "rvolunteer", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    /// Print records as JSON instead of tables
    #[arg(long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage organizer/volunteer accounts
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage events
    Events {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage duties (task categories scoped to an event)
    Duties {
        #[command(subcommand)]
        action: DutyAction,
    },

    /// Manage shifts
    Shifts {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Manage volunteers
    Volunteers {
        #[command(subcommand)]
        action: VolunteerAction,
    },

    /// Manage assignments and attendance
    Assignments {
        #[command(subcommand)]
        action: AssignmentAction,
    },

    /// Show dashboard statistics
    Stats,

    /// Show the volunteer portal for an email address
    Portal {
        /// Volunteer email
        email: String,
    },

    /// Print the internal operation log
    Log,

    /// Export the store
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Read commands from stdin, one per line, against a single store
    Shell,
}

// ---------------------------
// Users
// ---------------------------
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List all users
    List,
    /// Show a user by id
    Get { id: Id },
    /// Find a user by username
    Find { username: String },
    /// Create a user
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// organizer | volunteer (default: volunteer)
        #[arg(long)]
        role: Option<String>,
    },
}

// ---------------------------
// Events
// ---------------------------
#[derive(Subcommand, Debug)]
pub enum EventAction {
    /// List all events
    List,
    /// Show an event by id
    Get { id: Id },
    /// Create an event
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Start (YYYY-MM-DD HH:MM, RFC 3339, now, now+2h)
        #[arg(long)]
        start: String,
        /// End (YYYY-MM-DD HH:MM, RFC 3339, now, now+2h)
        #[arg(long)]
        end: String,
        #[arg(long)]
        location: String,
        /// Organizer user id
        #[arg(long)]
        organizer: Id,
        /// scheduled | active | completed | cancelled (default: scheduled)
        #[arg(long)]
        status: Option<String>,
    },
    /// Update only the given fields of an event
    Update {
        id: Id,
        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event (dependent duties and shifts are kept)
    Delete { id: Id },
}

#[derive(Args, Debug, Default)]
pub struct EventFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub organizer: Option<Id>,
    #[arg(long)]
    pub status: Option<String>,
}

// ---------------------------
// Duties
// ---------------------------
#[derive(Subcommand, Debug)]
pub enum DutyAction {
    /// List duties, optionally only those of one event
    List {
        #[arg(long)]
        event: Option<Id>,
    },
    /// Show a duty by id
    Get { id: Id },
    /// Create a duty
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        event: Id,
        /// Color tag (default: blue)
        #[arg(long)]
        color: Option<String>,
    },
    /// Update only the given fields of a duty
    Update {
        id: Id,
        #[command(flatten)]
        fields: DutyFields,
    },
    /// Delete a duty (shifts referencing it are kept)
    Delete { id: Id },
}

#[derive(Args, Debug, Default)]
pub struct DutyFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long)]
    pub event: Option<Id>,
    #[arg(long)]
    pub color: Option<String>,
}

// ---------------------------
// Shifts
// ---------------------------
#[derive(Subcommand, Debug)]
pub enum ShiftAction {
    /// List shifts, optionally only those of one event
    List {
        #[arg(long)]
        event: Option<Id>,
        /// Include event/duty names, assigned count and timing
        #[arg(long)]
        details: bool,
    },
    /// Show a shift by id
    Get { id: Id },
    /// Create a shift
    Create {
        #[arg(long)]
        event: Id,
        #[arg(long)]
        duty: Id,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        location: Option<String>,
        /// Maximum number of volunteers (default: 1)
        #[arg(long)]
        max: Option<u32>,
    },
    /// Update only the given fields of a shift
    Update {
        id: Id,
        #[command(flatten)]
        fields: ShiftFields,
    },
    /// Delete a shift (assignments referencing it are kept)
    Delete { id: Id },
}

#[derive(Args, Debug, Default)]
pub struct ShiftFields {
    #[arg(long)]
    pub event: Option<Id>,
    #[arg(long)]
    pub duty: Option<Id>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long, conflicts_with = "clear_location")]
    pub location: Option<String>,
    #[arg(long)]
    pub clear_location: bool,
    #[arg(long)]
    pub max: Option<u32>,
}

// ---------------------------
// Volunteers
// ---------------------------
#[derive(Subcommand, Debug)]
pub enum VolunteerAction {
    /// List all volunteers
    List,
    /// Show a volunteer by id
    Get { id: Id },
    /// Find a volunteer by email
    Find { email: String },
    /// Register a volunteer
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        /// Comma-separated skill tags
        #[arg(long)]
        skills: Option<String>,
        /// Comma-separated availability tags
        #[arg(long)]
        availability: Option<String>,
    },
    /// Update only the given fields of a volunteer
    Update {
        id: Id,
        #[command(flatten)]
        fields: VolunteerFields,
    },
    /// Delete a volunteer (assignments referencing it are kept)
    Delete { id: Id },
}

#[derive(Args, Debug, Default)]
pub struct VolunteerFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, conflicts_with = "clear_phone")]
    pub phone: Option<String>,
    #[arg(long)]
    pub clear_phone: bool,
    #[arg(long, conflicts_with = "clear_skills")]
    pub skills: Option<String>,
    #[arg(long)]
    pub clear_skills: bool,
    #[arg(long, conflicts_with = "clear_availability")]
    pub availability: Option<String>,
    #[arg(long)]
    pub clear_availability: bool,
}

// ---------------------------
// Assignments
// ---------------------------
#[derive(Subcommand, Debug)]
pub enum AssignmentAction {
    /// List assignments, optionally filtered by volunteer or shift
    List {
        #[arg(long, conflicts_with = "shift")]
        volunteer: Option<Id>,
        #[arg(long)]
        shift: Option<Id>,
    },
    /// Show an assignment by id
    Get { id: Id },
    /// Assign a volunteer to a shift
    Create {
        #[arg(long)]
        shift: Id,
        #[arg(long)]
        volunteer: Id,
        /// assigned | checked_in | break | no_show (default: assigned)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update only the given fields of an assignment
    Update {
        id: Id,
        #[command(flatten)]
        fields: AssignmentFields,
    },
    /// Delete an assignment
    Delete { id: Id },
    /// Check the volunteer in (default: now)
    CheckIn {
        id: Id,
        #[arg(long)]
        at: Option<String>,
    },
    /// Check the volunteer out (default: now)
    CheckOut {
        id: Id,
        #[arg(long)]
        at: Option<String>,
    },
    /// Put the volunteer on a break
    Break { id: Id },
    /// Mark the volunteer as a no-show
    NoShow { id: Id },
}

#[derive(Args, Debug, Default)]
pub struct AssignmentFields {
    #[arg(long)]
    pub shift: Option<Id>,
    #[arg(long)]
    pub volunteer: Option<Id>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, conflicts_with = "clear_check_in")]
    pub check_in: Option<String>,
    #[arg(long)]
    pub clear_check_in: bool,
    #[arg(long, conflicts_with = "clear_check_out")]
    pub check_out: Option<String>,
    #[arg(long)]
    pub clear_check_out: bool,
    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    #[arg(long)]
    pub clear_notes: bool,
}
