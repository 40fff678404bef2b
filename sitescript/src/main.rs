//! Convert a list's site script into a filtered, reusable site script.
//!
//! Reads raw site script content (as generated for a list), removes the action
//! categories switched off by config or flags, and writes, stores, or
//! associates the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;

use sitescript::associate::{AssociateTarget, NewSiteDesign, associate_site_script};
use sitescript::core::policy::PolicySet;
use sitescript::core::transform::transform_content;
use sitescript::exit_codes;
use sitescript::export::{TemplateSettings, export_to_file};
use sitescript::io::catalog::{FileCatalog, SiteDesignsService, is_site_design_not_found};
use sitescript::io::config::{
    DEFAULT_CONFIG_PATH, SiteScriptConfig, load_config, write_config,
};
use sitescript::io::script_store::{load_script_content, to_script_json, write_script_json};
use sitescript::logging;
use sitescript::publish::publish_site_script;
use sitescript::script::WebTemplate;

#[derive(Parser)]
#[command(
    name = "sitescript",
    version,
    about = "Save a list's structure as a reusable site script"
)]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Filter raw site script content and print (or write) the result.
    Filter {
        /// Raw site script content (JSON).
        input: PathBuf,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Write here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build a site script and write it to `<output_dir>/<title>.json`.
    Export {
        input: PathBuf,
        #[command(flatten)]
        template: TemplateArgs,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Override the configured output directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Build a site script and store it in the tenant catalog; prints its id.
    Save {
        input: PathBuf,
        #[command(flatten)]
        template: TemplateArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// List site designs in the catalog.
    Designs,
    /// Add a stored site script to a site design.
    Associate(AssociateArgs),
}

#[derive(Args)]
struct TemplateArgs {
    /// Site script title (also the exported file name).
    #[arg(short, long, default_value = "")]
    title: String,
    /// Site script description.
    #[arg(short, long, default_value = "")]
    description: String,
}

#[derive(Args, Debug, Clone, Copy, Default)]
struct PolicyArgs {
    /// Drop view actions (addSPView, removeSPView).
    #[arg(long)]
    no_views: bool,
    /// Drop content type and site column actions.
    #[arg(long)]
    no_content_types: bool,
    /// Drop navigation link actions.
    #[arg(long)]
    no_nav_link: bool,
    /// Drop description actions.
    #[arg(long)]
    no_description: bool,
}

impl PolicyArgs {
    /// Flags can only switch configured categories off.
    fn apply(self, base: PolicySet) -> PolicySet {
        PolicySet {
            include_views: base.include_views && !self.no_views,
            include_content_types: base.include_content_types && !self.no_content_types,
            include_nav_link: base.include_nav_link && !self.no_nav_link,
            include_description: base.include_description && !self.no_description,
        }
    }
}

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("target")
        .required(true)
        .args(["design", "new_title", "list_title"])
))]
struct AssociateArgs {
    /// Id returned by `sitescript save`.
    site_script_id: String,
    /// Existing site design id.
    #[arg(long)]
    design: Option<String>,
    /// Title for a new site design.
    #[arg(long)]
    new_title: Option<String>,
    /// Create a new site design titled "<list title> template".
    #[arg(long)]
    list_title: Option<String>,
    /// Description for a new site design.
    #[arg(long, default_value = "")]
    new_description: String,
    /// Web template for a new site design.
    #[arg(long, value_enum, default_value_t = TemplateKind::TeamSite)]
    web_template: TemplateKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TemplateKind {
    TeamSite,
    CommunicationSite,
}

impl From<TemplateKind> for WebTemplate {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::TeamSite => WebTemplate::TeamSite,
            TemplateKind::CommunicationSite => WebTemplate::CommunicationSite,
        }
    }
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli.config.as_path();

    match cli.command {
        Command::Init { force } => cmd_init(config_path, force),
        Command::Filter {
            input,
            policy,
            output,
        } => cmd_filter(&resolve_config(config_path)?, input, policy, output),
        Command::Export {
            input,
            template,
            policy,
            output_dir,
        } => {
            let config = resolve_config(config_path)?;
            let settings = template_settings(&config, template, policy);
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let path = export_to_file(&input, &output_dir, &settings)?;
            println!("{}", path.display());
            Ok(exit_codes::OK)
        }
        Command::Save {
            input,
            template,
            policy,
        } => {
            let config = resolve_config(config_path)?;
            let settings = template_settings(&config, template, policy);
            let mut catalog = FileCatalog::new(&config.catalog_path);
            let outcome = publish_site_script(&mut catalog, &input, &settings)?;
            println!("{}", outcome.site_script_id);
            Ok(exit_codes::OK)
        }
        Command::Designs => {
            let config = resolve_config(config_path)?;
            let catalog = FileCatalog::new(&config.catalog_path);
            for design in catalog.site_designs()? {
                println!("{}\t{}", design.id, design.title);
            }
            Ok(exit_codes::OK)
        }
        Command::Associate(args) => cmd_associate(&resolve_config(config_path)?, args),
    }
}

fn resolve_config(path: &Path) -> Result<SiteScriptConfig> {
    let config = load_config(path).with_context(|| format!("load config {}", path.display()))?;
    debug!(config = ?config, "config resolved");
    Ok(config)
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &SiteScriptConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("{}", config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_filter(
    config: &SiteScriptConfig,
    input: PathBuf,
    policy: PolicyArgs,
    output: Option<PathBuf>,
) -> Result<i32> {
    let content = load_script_content(&input)?;
    let processed = transform_content(&content, &policy.apply(config.policy));
    match output {
        Some(path) => {
            write_script_json(&path, &processed)?;
            println!("{}", path.display());
        }
        None => print!("{}", to_script_json(&processed)?),
    }
    Ok(exit_codes::OK)
}

fn cmd_associate(config: &SiteScriptConfig, args: AssociateArgs) -> Result<i32> {
    let mut catalog = FileCatalog::new(&config.catalog_path);
    let web_template = WebTemplate::from(args.web_template);
    let target = match (args.design, args.new_title, args.list_title) {
        (Some(id), _, _) => AssociateTarget::Existing(id),
        (None, Some(title), _) => AssociateTarget::New(NewSiteDesign {
            title,
            description: args.new_description,
            web_template,
        }),
        (None, None, Some(list_title)) => AssociateTarget::New(NewSiteDesign {
            description: args.new_description,
            ..NewSiteDesign::for_list(&list_title, web_template)
        }),
        (None, None, None) => bail!("one of --design, --new-title, --list-title is required"),
    };
    match associate_site_script(&mut catalog, &args.site_script_id, &target) {
        Ok(design) => {
            println!("{}\t{}", design.id, design.title);
            Ok(exit_codes::OK)
        }
        Err(err) if is_site_design_not_found(&err) => {
            eprintln!("{:#}", err);
            Ok(exit_codes::NOT_FOUND)
        }
        Err(err) => Err(err),
    }
}

fn template_settings(
    config: &SiteScriptConfig,
    template: TemplateArgs,
    policy: PolicyArgs,
) -> TemplateSettings {
    TemplateSettings {
        title: template.title,
        description: template.description,
        version: config.script_version,
        policy: policy.apply(config.policy),
    }
}
