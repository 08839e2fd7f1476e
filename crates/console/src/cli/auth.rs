use crate::{
    cli::{RegisterArgs, enter},
    navigation::{is_mobile_menu, menu_items},
    router::{Navigation, View},
    state::AppState,
};
use anyhow::{Context, Result, bail};
use dialoguer::{Input, Password};
use shared::domain::requests::{CreateUserRequest, LoginRequest};

pub async fn login(state: &AppState, user: Option<String>, password: Option<String>) -> Result<()> {
    if let Navigation::Enter { view, .. } = state.navigate("/auth/login") {
        if view != View::Login {
            let who = state
                .session
                .current_user()
                .map(|u| u.email)
                .unwrap_or_default();
            bail!("Already logged in as {who}, run `catalog-console logout` first");
        }
    }

    let user = match user {
        Some(user) => user,
        None => Input::new()
            .with_prompt("Usuario")
            .interact_text()
            .context("Failed to read user")?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Contraseña")
            .interact()
            .context("Failed to read password")?,
    };

    let response = state.login(&LoginRequest::new(user, password)).await?;

    match response.role {
        Some(role) => println!(
            "Welcome {} {} ({role})",
            response.user.first_name, response.user.last_name
        ),
        None => println!(
            "Welcome {} {}",
            response.user.first_name, response.user.last_name
        ),
    }
    Ok(())
}

pub fn logout(state: &AppState) -> Result<()> {
    state.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(state: &AppState) -> Result<()> {
    let Some(user) = state.session.current_user() else {
        println!("Not logged in");
        return Ok(());
    };

    println!(
        "{} {} <{}> (id {})",
        user.first_name, user.last_name, user.email, user.id
    );
    if let Some(role) = state.session.role() {
        println!("Role: {role}");
    }
    Ok(())
}

pub async fn register(state: &AppState, args: RegisterArgs) -> Result<()> {
    enter(state, "/auth/register", View::Register)?;

    let req = create_user_request(args)?;
    let user = state.register(&req).await?;

    println!("Account {} created, you can now log in", user.email);
    Ok(())
}

pub(crate) fn create_user_request(args: RegisterArgs) -> Result<CreateUserRequest> {
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Contraseña")
            .with_confirmation("Repita la contraseña", "Las contraseñas no coinciden")
            .interact()
            .context("Failed to read password")?,
    };

    Ok(CreateUserRequest {
        email: args.email,
        password,
        first_name: args.first_name,
        last_name: args.last_name,
        active: None,
    })
}

pub fn nav(width: u32) {
    let mobile = is_mobile_menu(width);

    for item in menu_items() {
        if mobile {
            println!("{}", item.title);
        } else {
            let marker = if item.class.is_empty() { "" } else { " *" };
            println!("{:<16} {:<20} {}{marker}", item.path, item.title, item.icon);
        }
    }
}
