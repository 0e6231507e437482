//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use studentinfo::config::Config;
use studentinfo::storage::{dynamodb::sdk_client, DynamoDbRepository};

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the student table.
    Deploy(DeployCommand),

    /// Seed the student table with sample enrollments.
    Seed(SeedCommand),
}

/// Deploy or destroy the student table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the student table.

By default, this command creates the table keyed by studentId (HASH) and
courseId (RANGE) with on-demand billing. An existing table with a different
key schema is reported and left untouched.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, env = "TABLE_NAME", default_value = "students")]
    pub table_name: String,
}

/// Seed the student table with sample enrollments.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Insert sample student enrollments into DynamoDB.

Each student is enrolled in several courses, so one studentId appears under
more than one courseId. The generated records are deterministic: seeding
twice overwrites the same items.")]
pub struct SeedCommand {
    /// Number of enrollments to generate.
    #[arg(long, default_value = "12")]
    pub count: u32,

    /// Table name to use.
    #[arg(long, env = "TABLE_NAME", default_value = "students")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

fn load_config(table_name: &str) -> Result<Config> {
    let mut config = Config::from_env()?;
    config.table_name = table_name.to_string();
    Ok(config)
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let config = load_config(&cmd.table_name)?;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), config.target_display());
        aprintln!();
    }

    let dynamo_client = sdk_client(&config).await;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
        return Ok(());
    }

    let table_config = config::student_table_config().with_table_name(&cmd.table_name);
    let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in planning::format_deploy_plan(&plan) {
            if line.starts_with('+') {
                aprintln!("  {}", p_g(&line));
            } else if line.starts_with('!') {
                aprintln!("  {}", p_r(&line));
            } else {
                aprintln!("  {}", line);
            }
        }
        aprintln!();
    }

    match plan {
        planning::DeployPlan::NoChanges { .. } => {
            if !global.is_silent() {
                aprintln!("{}", p_g("Infrastructure is up to date."));
            }
            return Ok(());
        }
        planning::DeployPlan::KeySchemaMismatch { .. } => {
            return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
        }
        planning::DeployPlan::CreateTable { .. } => {}
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let config = load_config(&cmd.table_name)?;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), config.target_display());
        aprintln!("{} {}", p_b("Enrollment count:"), cmd.count);
        aprintln!();
    }

    let dynamo_client = sdk_client(&config).await;

    if client::get_table_state(&dynamo_client, &cmd.table_name)
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let students = seed::generate_seed_students(cmd.count);

    if !global.is_silent() {
        aprintln!("{}", p_c("Students to write:"));
        let shown = if global.is_verbose() { students.len() } else { 5 };
        for student in students.iter().take(shown) {
            aprintln!("  {} - {} ({})", student.key(), student.name, student.email);
        }
        if students.len() > shown {
            aprintln!("  ... and {} more", students.len() - shown);
        }
        aprintln!();
    }

    if !cmd.force {
        confirm(&format!("Write {} students?", students.len()), true)?;
    }

    let repo = DynamoDbRepository::new(dynamo_client, &cmd.table_name);
    let inserted = seed::seed_students(&repo, &students).await?;

    if !global.is_silent() {
        aprintln!("{} {} students written.", p_g("Success:"), inserted);
    }

    Ok(())
}
