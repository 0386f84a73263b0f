use crate::*;
use crate::roster::Person;

pub fn handle_query_commands(cli: &Cli, people: &[Person]) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List => {
            audit("list", serde_json::json!({"count": people.len()}));
            let views: Vec<PersonView> = people.iter().map(PersonView::from).collect();
            print_out(cli.json, &views, person_row)?;
        }
        Commands::Find { name } => {
            audit("find", serde_json::json!({"name": name}));
            let p = roster::find(people, name)?;
            let view = PersonView::from(p);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: view
                    })?
                );
            } else {
                println!("name: {}", view.name);
                println!("id: {}", view.id);
                println!(
                    "age: {}",
                    view.age.map_or_else(|| "n/a".to_string(), |a| a.to_string())
                );
                println!("city: {}", view.city.unwrap_or_else(|| "n/a".to_string()));
            }
        }
        Commands::Filter { name } => {
            audit("filter", serde_json::json!({"name": name}));
            let views: Vec<PersonView> = roster::filter(people, name)
                .into_iter()
                .map(PersonView::from)
                .collect();
            print_out(cli.json, &views, person_row)?;
        }
        Commands::Scan { name } => {
            audit("scan", serde_json::json!({"name": name}));
            if cli.json {
                let views: Vec<PersonView> = roster::filter(people, name)
                    .into_iter()
                    .map(PersonView::from)
                    .collect();
                print_out(true, &views, person_row)?;
            } else {
                // forEach of the roster: visit every record, print the matches.
                for p in people {
                    if roster::name_matches(p, name) {
                        println!("{}", person_row(&PersonView::from(p)));
                    }
                }
            }
        }
        Commands::Names => {
            audit("names", serde_json::json!({"count": people.len()}));
            let names = roster::names(people);
            print_out(cli.json, &names, |n| n.to_string())?;
        }
        Commands::Exists { name } => {
            audit("exists", serde_json::json!({"name": name}));
            let found = roster::exists(people, name);
            print_one(cli.json, found, |f| f.to_string())?;
        }
        Commands::Every { check, min_age } => {
            audit(
                "every",
                serde_json::json!({"check": check.label(), "min_age": min_age}),
            );
            let holds = match check {
                EveryCheck::Adult => roster::all_adults(people, *min_age),
                EveryCheck::Located => roster::all_located(people),
            };
            let report = EveryReport {
                check: check.label().to_string(),
                holds,
                total: people.len(),
            };
            print_one(cli.json, report, |r| {
                format!("every {}: {}", r.check, r.holds)
            })?;
        }
    }

    Ok(())
}

fn person_row(p: &PersonView) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        p.id,
        p.name,
        p.age.map_or_else(|| "-".to_string(), |a| a.to_string()),
        p.city.as_deref().unwrap_or("-")
    )
}
