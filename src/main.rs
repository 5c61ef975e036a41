use clap::{Parser, Subcommand};
use filebind::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "filebind")]
#[command(about = "Binds directory contents to script variables")]
#[command(long_about = "\
Binds directory contents to script variables

Your filesystem is the data source. Each file in a task's input directory
becomes one generated assignment statement; all statements are appended to
a base source file and written to the output artifact in a single pass.

Example task (filebind.toml):

  [[task]]
  name = \"strings\"
  input_dir = \"content/strings\"    # 00-title.txt, 01-title.txt, ...
  extensions = \"txt\"
  use_indexes = true
  indexes = [
    { token = \"00\", value = 0 },
    { token = \"01\", value = 1 },
  ]
  base_file = \"src/app-base.js\"
  variable = \"app.strings\"
  output_file = \"dist/app.js\"

Produces dist/app.js = app-base.js plus:

  app.strings[0].title = 'Dawn';
  app.strings[1].title = 'Dusk';

Name resolution (first applicable mode wins):
  Index mode:     filename starts with a configured token → that slot
  File-path mode: use_file_name → the walked path becomes the index key
  Plain mode:     filename stem becomes the property name

Run 'filebind gen-config' to generate a documented filebind.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Task configuration file
    #[arg(long, default_value = "filebind.toml", global = true)]
    config: PathBuf,

    /// Run only the named task (repeatable)
    #[arg(long, global = true)]
    task: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every enabled task and write each output artifact
    Build,
    /// Compute every task without writing anything
    Check,
    /// Print a stock filebind.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let cfg = config::load_config(&cli.config)?;
            let tasks = cfg.select(&cli.task)?;
            println!(
                "==> Building {} from {}",
                task_count(tasks.len()),
                cli.config.display()
            );
            if cli.task.is_empty() {
                for task in cfg.tasks.iter().filter(|t| !t.enabled) {
                    println!("==> Skipping task '{}' (disabled)", task.display_name());
                }
            }
            // Tasks run and write strictly in order: a later task may use
            // an earlier task's output as its base file.
            for task in &tasks {
                let run = generate::run_task(task)?;
                generate::write_output(task, &run)?;
                output::print_task_report(task, &run);
            }
            println!("==> Build complete");
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let cfg = config::load_config(&cli.config)?;
            let tasks = cfg.select(&cli.task)?;
            for task in &tasks {
                let run = generate::run_task(task)?;
                output::print_task_report(task, &run);
            }
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn task_count(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{n} tasks")
    }
}
