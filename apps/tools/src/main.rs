use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use frontcontroller::{view, FrontController, ViewResolver};
use shared::protocol::ParamMap;
use storage::MemberStore;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = view::DEFAULT_VIEW_PREFIX)]
    view_prefix: String,
    #[arg(long, default_value = view::DEFAULT_VIEW_SUFFIX)]
    view_suffix: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every registered path.
    Routes,
    /// Run requests in order against one fresh store and print each page.
    Replay {
        /// Request targets such as `/members/save?username=alice&age=20`.
        #[arg(required = true)]
        requests: Vec<String>,
        /// Keep going after a request fails.
        #[arg(long)]
        keep_going: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resolver = ViewResolver::new(cli.view_prefix, cli.view_suffix);
    let front = FrontController::for_members(MemberStore::new(), resolver)
        .context("failed to wire front controller")?;

    match cli.command {
        Command::Routes => {
            for route in front.routes() {
                println!("{route}");
            }
        }
        Command::Replay {
            requests,
            keep_going,
        } => {
            for target in requests {
                let (path, params) = split_target(&target);
                println!("==> {target}");
                match front.serve(path, &params) {
                    Ok(rendered) => {
                        println!("[{}]", rendered.view_path);
                        println!("{}", rendered.body);
                    }
                    Err(err) if keep_going => {
                        println!("error ({:?}): {err}", err.code());
                    }
                    Err(err) => {
                        return Err(err).with_context(|| format!("request `{target}` failed"));
                    }
                }
            }
        }
    }

    Ok(())
}

fn split_target(target: &str) -> (&str, ParamMap) {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let mut params = ParamMap::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    (path, params)
}
