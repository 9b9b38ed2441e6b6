use anyhow::{bail, Context};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use patrimony_core::allocations::AllocationCreateData;
use patrimony_core::events::EventCreateData;
use patrimony_core::insurance::InsuranceCreateData;
use patrimony_core::projection::chart_series;
use patrimony_core::simulations::{LifeStatus, SimulationVersionCreateData};

use crate::config::Config;
use crate::main_lib::Services;
use crate::render;

pub const USAGE: &str = "usage: patrimony <command>

  dashboard                              render the selected simulation
  history                                list recent simulations
  duplicate <id> <name>                  copy a simulation
  delete <id>                            delete a simulation
  current <id>                           create the current-situation version
  projection <id> [status]               chart a simulation (Vivo, Morto, Inválido)
  simulation show <id>
  simulation create <name>
  simulation rename <id> <name>
  version show|delete <id>
  version create <json>
  version update <id> <json>
  allocation show|delete <id>
  allocation create <json>
  allocation update <id> <json>
  allocation value <id> <amount>         record a new allocation value
  event show|delete <id>
  event create <simulation-id> <json>
  event update <id> <json>
  insurance show|delete <id>
  insurance create <json>
  insurance update <id> <json>";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dashboard,
    History,
    Duplicate { id: i64, name: String },
    DeleteSimulation(i64),
    CurrentSituation(i64),
    Projection { id: i64, status: LifeStatus },
    ShowSimulation(i64),
    CreateSimulation(String),
    RenameSimulation { id: i64, name: String },
    ShowVersion(i64),
    CreateVersion(SimulationVersionCreateData),
    UpdateVersion { id: i64, data: SimulationVersionCreateData },
    DeleteVersion(i64),
    ShowAllocation(i64),
    CreateAllocation(AllocationCreateData),
    UpdateAllocation { id: i64, data: AllocationCreateData },
    UpdateAllocationValue { id: i64, value: Decimal },
    DeleteAllocation(i64),
    ShowEvent(i64),
    CreateEvent { simulation_id: i64, data: EventCreateData },
    UpdateEvent { id: i64, data: EventCreateData },
    DeleteEvent(i64),
    ShowInsurance(i64),
    CreateInsurance(InsuranceCreateData),
    UpdateInsurance { id: i64, data: InsuranceCreateData },
    DeleteInsurance(i64),
}

/// Parses the arguments after the program name. No arguments means `dashboard`.
pub fn parse_command(args: &[String]) -> anyhow::Result<Command> {
    let word = |index: usize| args.get(index).map(String::as_str);
    let rest = |from: usize| args.get(from..).map(|tail| tail.join(" ")).unwrap_or_default();

    let command = match (word(0).unwrap_or("dashboard"), word(1)) {
        ("dashboard", _) => Command::Dashboard,
        ("history", _) => Command::History,
        ("duplicate", _) => Command::Duplicate {
            id: parse_id(word(1))?,
            name: rest(2),
        },
        ("delete", _) => Command::DeleteSimulation(parse_id(word(1))?),
        ("current", _) => Command::CurrentSituation(parse_id(word(1))?),
        ("projection", _) => Command::Projection {
            id: parse_id(word(1))?,
            status: match word(2) {
                Some(raw) => raw.parse::<LifeStatus>()?,
                None => LifeStatus::default(),
            },
        },

        ("simulation", Some("show")) => Command::ShowSimulation(parse_id(word(2))?),
        ("simulation", Some("create")) => Command::CreateSimulation(rest(2)),
        ("simulation", Some("rename")) => Command::RenameSimulation {
            id: parse_id(word(2))?,
            name: rest(3),
        },

        ("version", Some("show")) => Command::ShowVersion(parse_id(word(2))?),
        ("version", Some("create")) => Command::CreateVersion(parse_json(word(2))?),
        ("version", Some("update")) => Command::UpdateVersion {
            id: parse_id(word(2))?,
            data: parse_json(word(3))?,
        },
        ("version", Some("delete")) => Command::DeleteVersion(parse_id(word(2))?),

        ("allocation", Some("show")) => Command::ShowAllocation(parse_id(word(2))?),
        ("allocation", Some("create")) => Command::CreateAllocation(parse_json(word(2))?),
        ("allocation", Some("update")) => Command::UpdateAllocation {
            id: parse_id(word(2))?,
            data: parse_json(word(3))?,
        },
        ("allocation", Some("value")) => Command::UpdateAllocationValue {
            id: parse_id(word(2))?,
            value: parse_amount(word(3))?,
        },
        ("allocation", Some("delete")) => Command::DeleteAllocation(parse_id(word(2))?),

        ("event", Some("show")) => Command::ShowEvent(parse_id(word(2))?),
        ("event", Some("create")) => Command::CreateEvent {
            simulation_id: parse_id(word(2))?,
            data: parse_json(word(3))?,
        },
        ("event", Some("update")) => Command::UpdateEvent {
            id: parse_id(word(2))?,
            data: parse_json(word(3))?,
        },
        ("event", Some("delete")) => Command::DeleteEvent(parse_id(word(2))?),

        ("insurance", Some("show")) => Command::ShowInsurance(parse_id(word(2))?),
        ("insurance", Some("create")) => Command::CreateInsurance(parse_json(word(2))?),
        ("insurance", Some("update")) => Command::UpdateInsurance {
            id: parse_id(word(2))?,
            data: parse_json(word(3))?,
        },
        ("insurance", Some("delete")) => Command::DeleteInsurance(parse_id(word(2))?),

        _ => bail!("unknown command '{}'\n{}", args.join(" "), USAGE),
    };
    Ok(command)
}

pub async fn run(command: Command, services: &Services, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Dashboard => {
            let snapshot = services.dashboard.open(&config.dashboard_request()).await?;
            if config.json_output {
                print_json(&snapshot)?;
            } else {
                print!("{}", render::dashboard(&snapshot));
            }
        }
        Command::History => {
            let entries = services.history.list_history().await?;
            if config.json_output {
                print_json(&entries)?;
            } else {
                print!("{}", render::history(&entries));
            }
        }
        Command::Duplicate { id, name } => {
            let new_id = services.history.duplicate(id, &name).await?;
            println!("Simulação {} duplicada como {}", id, new_id);
        }
        Command::DeleteSimulation(id) => {
            services.history.delete(id).await?;
            println!("Simulação {} excluída", id);
        }
        Command::CurrentSituation(id) => {
            print_json(&services.simulations.create_current_situation(id).await?)?
        }
        Command::Projection { id, status } => {
            let series = services.history.projection_for(id, status).await?;
            let chart = chart_series(&series, config.show_comparison);
            if config.json_output {
                print_json(&chart)?;
            } else {
                print!("{}", render::chart(&chart));
            }
        }

        Command::ShowSimulation(id) => print_json(&services.simulations.get(id).await?)?,
        Command::CreateSimulation(name) => {
            print_json(&services.simulations.create(&name).await?)?
        }
        Command::RenameSimulation { id, name } => {
            print_json(&services.simulations.rename(id, &name).await?)?
        }

        Command::ShowVersion(id) => print_json(&services.simulations.get_version(id).await?)?,
        Command::CreateVersion(data) => {
            print_json(&services.simulations.create_version(data).await?)?
        }
        Command::UpdateVersion { id, data } => {
            print_json(&services.simulations.update_version(id, data).await?)?
        }
        Command::DeleteVersion(id) => {
            services.simulations.delete_version(id).await?;
            println!("Versão {} excluída", id);
        }

        Command::ShowAllocation(id) => print_json(&services.allocations.get(id).await?)?,
        Command::CreateAllocation(data) => {
            print_json(&services.allocations.create(data).await?)?
        }
        Command::UpdateAllocation { id, data } => {
            print_json(&services.allocations.update(id, data).await?)?
        }
        Command::UpdateAllocationValue { id, value } => {
            print_json(&services.allocations.update_value(id, value).await?)?
        }
        Command::DeleteAllocation(id) => {
            services.allocations.delete(id).await?;
            println!("Alocação {} excluída", id);
        }

        Command::ShowEvent(id) => print_json(&services.events.get(id).await?)?,
        Command::CreateEvent {
            simulation_id,
            data,
        } => print_json(&services.events.create(simulation_id, data).await?)?,
        Command::UpdateEvent { id, data } => {
            print_json(&services.events.update(id, data).await?)?
        }
        Command::DeleteEvent(id) => {
            services.events.delete(id).await?;
            println!("Evento {} excluído", id);
        }

        Command::ShowInsurance(id) => print_json(&services.insurances.get(id).await?)?,
        Command::CreateInsurance(data) => {
            print_json(&services.insurances.create(data).await?)?
        }
        Command::UpdateInsurance { id, data } => {
            print_json(&services.insurances.update(id, data).await?)?
        }
        Command::DeleteInsurance(id) => {
            services.insurances.delete(id).await?;
            println!("Seguro {} excluído", id);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_id(raw: Option<&str>) -> anyhow::Result<i64> {
    let raw = raw.with_context(|| USAGE.to_string())?;
    raw.parse::<i64>()
        .with_context(|| format!("invalid id '{}'", raw))
}

fn parse_amount(raw: Option<&str>) -> anyhow::Result<Decimal> {
    let raw = raw.with_context(|| USAGE.to_string())?;
    raw.parse::<Decimal>()
        .with_context(|| format!("invalid amount '{}'", raw))
}

fn parse_json<T: DeserializeOwned>(raw: Option<&str>) -> anyhow::Result<T> {
    let raw = raw.with_context(|| USAGE.to_string())?;
    serde_json::from_str(raw).with_context(|| format!("invalid JSON payload '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrimony_core::events::EventFrequency;
    use rust_decimal_macros::dec;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_no_arguments_opens_dashboard() {
        assert_eq!(parse_command(&[]).unwrap(), Command::Dashboard);
    }

    #[test]
    fn test_names_keep_their_spaces() {
        assert_eq!(
            parse_command(&args("simulation rename 4 Plano de aposentadoria")).unwrap(),
            Command::RenameSimulation {
                id: 4,
                name: "Plano de aposentadoria".to_string()
            }
        );
        assert_eq!(
            parse_command(&args("duplicate 3 Plano B")).unwrap(),
            Command::Duplicate {
                id: 3,
                name: "Plano B".to_string()
            }
        );
    }

    #[test]
    fn test_projection_status_defaults_to_alive() {
        assert_eq!(
            parse_command(&args("projection 5")).unwrap(),
            Command::Projection {
                id: 5,
                status: LifeStatus::Alive
            }
        );
        assert_eq!(
            parse_command(&args("projection 5 morto")).unwrap(),
            Command::Projection {
                id: 5,
                status: LifeStatus::Deceased
            }
        );
        assert!(parse_command(&args("projection 5 zumbi")).is_err());
    }

    #[test]
    fn test_allocation_value_takes_decimal_amount() {
        assert_eq!(
            parse_command(&args("allocation value 7 1250000.50")).unwrap(),
            Command::UpdateAllocationValue {
                id: 7,
                value: dec!(1250000.50)
            }
        );
        assert!(parse_command(&args("allocation value 7 muito")).is_err());
    }

    #[test]
    fn test_event_create_reads_json_payload() {
        let payload =
            r#"{"type":"entrada","value":12000,"frequency":"mensal","startDate":"2030-03-01"}"#;
        let argv = vec![
            "event".to_string(),
            "create".to_string(),
            "3".to_string(),
            payload.to_string(),
        ];
        match parse_command(&argv).unwrap() {
            Command::CreateEvent {
                simulation_id,
                data,
            } => {
                assert_eq!(simulation_id, 3);
                assert_eq!(data.frequency, EventFrequency::Monthly);
                assert_eq!(data.start_date, "2030-03-01");
            }
            other => panic!("expected CreateEvent, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_input_is_rejected() {
        assert!(parse_command(&args("current abc")).is_err());
        assert!(parse_command(&args("version delete")).is_err());
        assert!(parse_command(&args("insurance create {not-json}")).is_err());
        assert!(parse_command(&args("allocation explode 1")).is_err());
        assert!(parse_command(&args("rebuild")).is_err());
    }
}
