use anyhow::{bail, Context};
use chrono::Local;
use hormodular::codec::{self, ModuleId};
use hormodular::config::ConfigManager;
use hormodular::results::{self, IndividualSelector};
use hormodular::services::{run_timestamp, ProcessLauncher, Session};
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = "hormodular.toml";

const USAGE: &str = "Usage: hormodular [--config <file>] <command>

Commands:
  id <description>              module id of a topology, e.g. \"(F, 90, X)\"
  topology <id>                 topology description of a module id
  list <results> [--json]       individuals stored in a milestone file
  gait <results> <n|best>       gait table of an individual
  evaluate <results> <n|best>   run the simulator on an individual
  evolve                        prepare a run folder and launch the evolution";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let config_path = take_config_flag(&mut args)?;

    let Some(command) = args.first().cloned() else {
        println!("{}", USAGE);
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "id" => {
            let description = rest.join(" ");
            let id = codec::module_id(&description)
                .with_context(|| format!("cannot encode '{}'", description))?;
            println!("ID: {}", id);
        }
        "topology" => {
            let id: ModuleId = arg(rest, 0, "id")?.parse()?;
            let path = codec::decode(&id)?;
            println!("{}", path);
        }
        "list" => {
            let individuals = results::load_individuals_from_file(arg(rest, 0, "results")?)?;
            if rest.iter().any(|a| a == "--json") {
                println!("{}", results::individuals_to_json(&individuals)?);
            } else {
                for individual in &individuals {
                    println!("{}", individual);
                }
            }
        }
        "gait" => {
            let manager = load_config(&config_path)?;
            let individuals = results::load_individuals_from_file(arg(rest, 0, "results")?)?;
            let selector: IndividualSelector = arg(rest, 1, "individual")?.parse()?;
            let individual = selector.select(&individuals)?;

            let table = individual
                .gait_table(manager.get().robot.modules)
                .with_context(|| format!("cannot decode {}", individual.name))?;
            print!("{}", table.render());
        }
        "evaluate" => {
            let manager = load_config(&config_path)?;
            let individuals = results::load_individuals_from_file(arg(rest, 0, "results")?)?;
            let selector: IndividualSelector = arg(rest, 1, "individual")?.parse()?;
            let individual = selector.select(&individuals)?;

            let session = Session::new(manager.get(), ProcessLauncher);
            let report = session.evaluate_individual(individual, &run_timestamp(&Local::now()))?;
            println!("{} -> {}", individual, report.workspace.folder().display());
        }
        "evolve" => {
            let manager = load_config(&config_path)?;
            let session = Session::new(manager.get(), ProcessLauncher);
            let report = session.run_evolution(&run_timestamp(&Local::now()))?;
            println!("Run folder: {}", report.workspace.folder().display());
        }
        other => bail!("unknown command '{}'\n\n{}", other, USAGE),
    }

    Ok(())
}

fn take_config_flag(args: &mut Vec<String>) -> anyhow::Result<PathBuf> {
    match args.iter().position(|a| a == "--config") {
        Some(index) => {
            if index + 1 >= args.len() {
                bail!("--config needs a file");
            }
            let path = PathBuf::from(args.remove(index + 1));
            args.remove(index);
            Ok(path)
        }
        None => Ok(PathBuf::from(DEFAULT_CONFIG)),
    }
}

fn load_config(path: &Path) -> anyhow::Result<ConfigManager> {
    let manager = ConfigManager::new();
    manager
        .load_from_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    Ok(manager)
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> anyhow::Result<&'a str> {
    match args.get(index) {
        Some(value) => Ok(value),
        None => bail!("missing <{}>\n\n{}", name, USAGE),
    }
}
