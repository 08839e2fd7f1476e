mod args;
mod auth;
mod category;
mod product;
mod user;

pub use self::args::{
    CategoryCommands, Cli, Commands, DateRangeArgs, DeleteArgs, OrderArg, PageArgs,
    ProductCommands, RegisterArgs, UserCommands,
};

use crate::{
    controller::{DeleteOutcome, ListController, ListSource, LoadOutcome},
    prompt::{AutoConfirm, DialoguerPrompt},
    router::{LOGIN_ROUTE, Navigation, View},
    state::AppState,
    view::{TableRow, pager_line, render_table},
};
use anyhow::{Result, anyhow, bail};
use shared::abstract_trait::DynConfirmPrompt;
use std::sync::Arc;

pub async fn run(cli: Cli, state: &AppState) -> Result<()> {
    match cli.command {
        Commands::Login { user, password } => auth::login(state, user, password).await,
        Commands::Logout => auth::logout(state),
        Commands::Whoami => auth::whoami(state),
        Commands::Register(args) => auth::register(state, args).await,
        Commands::Nav { width } => {
            auth::nav(width);
            Ok(())
        }
        Commands::Open { path } => open(state, &path).await,
        Commands::Categories { command } => category::execute(state, command).await,
        Commands::Products { command } => product::execute(state, command).await,
        Commands::Users { command } => user::execute(state, command).await,
    }
}

/// Resolves `path` through the router and fails unless it lands on `expected`.
pub(crate) fn enter(state: &AppState, path: &str, expected: View) -> Result<()> {
    match state.navigate(path) {
        Navigation::Enter { view, .. } if view == expected => Ok(()),
        Navigation::Enter { path: landed, .. } if landed == LOGIN_ROUTE => {
            bail!("Login required, run `catalog-console login` first")
        }
        Navigation::Enter { path: landed, .. } => {
            bail!("Access to {path} denied (redirected to {landed})")
        }
        Navigation::Blocked { .. } => bail!("Access to {path} denied"),
    }
}

async fn open(state: &AppState, path: &str) -> Result<()> {
    let (landed, view) = match state.navigate(path) {
        Navigation::Enter { path, view } => (path, view),
        Navigation::Blocked { path } => bail!("Could not open {path}: too many redirects"),
    };

    println!("{landed} ({view})");

    match view {
        View::Categories => category::show_page(state).await,
        View::Products => product::show_page(state).await,
        View::Users => user::show_page(state).await,
        View::Dashboard => {
            auth::whoami(state)?;
            println!();
            auth::nav(u32::MAX);
            Ok(())
        }
        View::Login => {
            println!("Run `catalog-console login` to sign in.");
            Ok(())
        }
        View::Register => {
            println!("Run `catalog-console register` to create an account.");
            Ok(())
        }
        View::ForgotPassword => {
            println!("Contact an administrator to reset your password.");
            Ok(())
        }
    }
}

pub(crate) fn confirm_prompt(yes: bool) -> DynConfirmPrompt {
    if yes {
        Arc::new(AutoConfirm(true))
    } else {
        Arc::new(DialoguerPrompt)
    }
}

pub(crate) fn check_load(outcome: LoadOutcome) -> Result<()> {
    match outcome {
        LoadOutcome::Loaded { .. } => Ok(()),
        LoadOutcome::Failed(e) => Err(e.into()),
        LoadOutcome::Stale => Err(anyhow!("List changed while loading, try again")),
    }
}

/// Loads `page` with a single request and rejects it when the reply shows it is past the end.
pub(crate) async fn load_page<S: ListSource>(list: &mut ListController<S>, page: u32) -> Result<()> {
    check_load(list.open_page(page).await)?;

    if list.current_page() > list.total_pages().max(1) {
        bail!(
            "Page {page} is out of range (1-{})",
            list.total_pages().max(1)
        );
    }

    Ok(())
}

pub(crate) fn print_list<S>(list: &ListController<S>, empty_message: &str)
where
    S: ListSource,
    S::Item: TableRow,
{
    println!("{}", render_table(list.items(), empty_message));
    println!();
    println!("{}", pager_line(list.current_page(), list.total_pages()));
}

pub(crate) fn print_rows<T: TableRow>(rows: &[T], empty_message: &str) {
    println!("{}", render_table(rows, empty_message));
}

pub(crate) fn report_delete(outcome: DeleteOutcome, what: &str) -> Result<()> {
    match outcome {
        DeleteOutcome::Deleted => {
            println!("{what} deleted");
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("Cancelled");
            Ok(())
        }
        DeleteOutcome::Failed(e) => Err(e.into()),
    }
}
