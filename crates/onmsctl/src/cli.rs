//! Clap derive structures for the `onmsctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Positional identifiers are all optional at the clap level: handlers
//! validate them in order so a missing argument is reported by name.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// onmsctl -- manage OpenNMS provisioning from the command line
#[derive(Debug, Parser)]
#[command(
    name = "onmsctl",
    version,
    about = "Manage OpenNMS requisitions and foreign source definitions",
    long_about = "A command-line client for the OpenNMS provisioning REST API.\n\n\
        Edits requisitions (nodes, interfaces, services, categories, assets)\n\
        and foreign source definitions (detectors, policies), imports\n\
        requisitions, and applies whole documents from YAML.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, env = "ONMSCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL including the web context (overrides profile)
    #[arg(long, env = "ONMSCTL_URL", global = true)]
    pub url: Option<String>,

    /// Username for basic auth (overrides profile)
    #[arg(long, short = 'u', env = "ONMSCTL_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password for basic auth (overrides profile and keyring)
    #[arg(long, env = "ONMSCTL_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ONMSCTL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ONMSCTL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "ONMSCTL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table for lists, YAML for single items (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage requisitions
    #[command(alias = "req")]
    Requisition(RequisitionArgs),

    /// Manage requisition nodes
    #[command(alias = "n")]
    Node(NodeArgs),

    /// Manage IP interfaces of a node
    #[command(alias = "intf")]
    Interface(InterfaceArgs),

    /// Manage monitored services of an IP interface
    #[command(alias = "svc")]
    Service(ServiceArgs),

    /// Manage categories of a node
    #[command(alias = "cat")]
    Category(CategoryArgs),

    /// Manage asset fields of a node
    Asset(AssetArgs),

    /// Manage foreign source definitions
    #[command(alias = "fs")]
    ForeignSource(ForeignSourceArgs),

    /// Manage foreign source detectors
    #[command(alias = "d")]
    Detector(DetectorArgs),

    /// Manage foreign source policies
    #[command(alias = "p")]
    Policy(PolicyArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print live completion candidates for a partial command line
    /// (`onmsctl complete node get Test` lists the foreign IDs of `Test`)
    #[command(hide = true)]
    Complete(CompleteArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// YAML payload of an `apply` command.
#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// External YAML file (use '-' for STDIN)
    #[arg(long, short = 'f')]
    pub file: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REQUISITIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RequisitionArgs {
    #[command(subcommand)]
    pub command: RequisitionCommand,
}

#[derive(Debug, Subcommand)]
pub enum RequisitionCommand {
    /// List all requisitions
    #[command(alias = "ls")]
    List,

    /// Show a requisition as YAML
    Get {
        /// Requisition name
        requisition: Option<String>,
    },

    /// Add an empty requisition (replaces an existing one)
    Add {
        /// Requisition name
        requisition: Option<String>,
    },

    /// Delete a requisition, pending and deployed
    #[command(alias = "del")]
    Delete {
        /// Requisition name
        requisition: Option<String>,
    },

    /// Import (synchronize) a requisition into the database
    #[command(alias = "sync")]
    Import {
        /// Requisition name
        requisition: Option<String>,

        /// How to treat nodes that already exist
        #[arg(long, short = 'r', default_value = "true")]
        rescan_existing: RescanExisting,
    },

    /// Create or replace a requisition from YAML
    Apply {
        /// Inline YAML document
        content: Option<String>,

        #[command(flatten)]
        payload: PayloadArgs,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RescanExisting {
    /// Rescan every existing node
    True,
    /// Only add and delete nodes
    False,
    /// Update the database without scanning
    Dbonly,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NODES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NodeArgs {
    #[command(subcommand)]
    pub command: NodeCommand,
}

#[derive(Debug, Subcommand)]
pub enum NodeCommand {
    /// List the nodes of a requisition
    #[command(alias = "ls")]
    List {
        /// Requisition name
        requisition: Option<String>,
    },

    /// Show a node as YAML
    Get {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
    },

    /// Add or replace a node
    #[command(alias = "set")]
    Add {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,

        /// Node label (defaults to the foreign ID)
        #[arg(long, short = 'l')]
        label: Option<String>,

        /// Monitoring location
        #[arg(long)]
        location: Option<String>,

        /// Building
        #[arg(long)]
        building: Option<String>,

        /// City
        #[arg(long)]
        city: Option<String>,
    },

    /// Delete a node
    #[command(alias = "del")]
    Delete {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
    },

    /// Create or replace a node from YAML
    Apply {
        /// Requisition name
        requisition: Option<String>,
        /// Inline YAML document
        content: Option<String>,

        #[command(flatten)]
        payload: PayloadArgs,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INTERFACES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct InterfaceArgs {
    #[command(subcommand)]
    pub command: InterfaceCommand,
}

#[derive(Debug, Subcommand)]
pub enum InterfaceCommand {
    /// List the IP interfaces of a node
    #[command(alias = "ls")]
    List {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
    },

    /// Show an IP interface as YAML
    Get {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// IP address
        ip_address: Option<String>,
    },

    /// Add or replace an IP interface
    #[command(alias = "set")]
    Add {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// IP address
        ip_address: Option<String>,

        /// Interface description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// SNMP primary flag
        #[arg(long, short = 'p')]
        snmp_primary: Option<SnmpPrimaryFlag>,
    },

    /// Delete an IP interface
    #[command(alias = "del")]
    Delete {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// IP address
        ip_address: Option<String>,
    },

    /// Create or replace an IP interface from YAML
    Apply {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// Inline YAML document
        content: Option<String>,

        #[command(flatten)]
        payload: PayloadArgs,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SnmpPrimaryFlag {
    /// Primary SNMP interface
    #[value(name = "P")]
    Primary,
    /// Secondary SNMP interface
    #[value(name = "S")]
    Secondary,
    /// Not eligible for SNMP
    #[value(name = "N")]
    NotEligible,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SERVICES / CATEGORIES / ASSETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ServiceArgs {
    #[command(subcommand)]
    pub command: ServiceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServiceCommand {
    /// List the monitored services of an IP interface
    #[command(alias = "ls")]
    List {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// IP address
        ip_address: Option<String>,
    },

    /// Add a monitored service to an IP interface
    #[command(alias = "set")]
    Add {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// IP address
        ip_address: Option<String>,
        /// Service name
        service: Option<String>,
    },

    /// Remove a monitored service from an IP interface
    #[command(alias = "del")]
    Delete {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// IP address
        ip_address: Option<String>,
        /// Service name
        service: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List the categories of a node
    #[command(alias = "ls")]
    List {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
    },

    /// Add a category to a node
    #[command(alias = "set")]
    Add {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// Category name
        category: Option<String>,
    },

    /// Remove a category from a node
    #[command(alias = "del")]
    Delete {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// Category name
        category: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct AssetArgs {
    #[command(subcommand)]
    pub command: AssetCommand,
}

#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    /// List the asset fields of a node
    #[command(alias = "ls")]
    List {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
    },

    /// Set an asset field on a node
    #[command(alias = "add")]
    Set {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// Asset field name
        name: Option<String>,
        /// Asset field value
        value: Option<String>,
    },

    /// Remove an asset field from a node
    #[command(alias = "del")]
    Delete {
        /// Requisition name
        requisition: Option<String>,
        /// Foreign ID of the node
        foreign_id: Option<String>,
        /// Asset field name
        name: Option<String>,
    },

    /// List the asset field names the server accepts
    #[command(alias = "enum")]
    Enumerate,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FOREIGN SOURCES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ForeignSourceArgs {
    #[command(subcommand)]
    pub command: ForeignSourceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ForeignSourceCommand {
    /// Show a foreign source definition as YAML
    Get {
        /// Foreign source name
        foreign_source: Option<String>,
    },

    /// Create or replace a foreign source definition from YAML
    Apply {
        /// Inline YAML document
        content: Option<String>,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Change the rescan interval of a foreign source definition
    Interval {
        /// Foreign source name
        foreign_source: Option<String>,
        /// Scan interval (e.g. 1d, 12h, 0 to disable)
        interval: Option<String>,
    },

    /// Delete a foreign source definition
    #[command(alias = "del")]
    Delete {
        /// Foreign source name
        foreign_source: Option<String>,
    },
}

/// Verbs shared by detectors and policies.
#[derive(Debug, Subcommand)]
pub enum PluginCommand {
    /// List the entries of a foreign source definition
    #[command(alias = "ls")]
    List {
        /// Foreign source name
        foreign_source: Option<String>,
    },

    /// Show an entry as YAML
    Get {
        /// Foreign source name
        foreign_source: Option<String>,
        /// Entry name
        name: Option<String>,
    },

    /// Add or replace an entry, overriding any existing content
    #[command(alias = "add")]
    Set {
        /// Foreign source name
        foreign_source: Option<String>,
        /// Entry name
        name: Option<String>,
        /// Implementation class
        class: Option<String>,

        /// A parameter, repeatable (e.g. -p 'matchBehavior=ALL_PARAMETERS')
        #[arg(long = "parameter", short = 'p')]
        parameters: Vec<String>,
    },

    /// Delete an entry
    #[command(alias = "del")]
    Delete {
        /// Foreign source name
        foreign_source: Option<String>,
        /// Entry name
        name: Option<String>,
    },

    /// Create or replace an entry from YAML
    Apply {
        /// Foreign source name
        foreign_source: Option<String>,
        /// Inline YAML document
        content: Option<String>,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// List the available implementation classes
    #[command(alias = "enum")]
    Enumerate,

    /// Describe an implementation class and its parameters
    #[command(alias = "desc")]
    Describe {
        /// Implementation name or class
        name: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct DetectorArgs {
    #[command(subcommand)]
    pub command: PluginCommand,
}

#[derive(Debug, Args)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub command: PluginCommand,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key (url, username, password_env, ca_cert, insecure, timeout)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store the active profile's password in the system keyring
    SetPassword,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Resource kind (e.g. node, foreign-source)
    pub kind: String,

    /// Verb being completed (e.g. get, delete)
    pub verb: String,

    /// Positional arguments typed so far
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
