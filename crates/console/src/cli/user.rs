use crate::{
    cli::{
        DateRangeArgs, PageArgs, UserCommands, auth::create_user_request, confirm_prompt, enter,
        load_page, print_list, print_rows, report_delete,
    },
    controller::{UserListController, UserSource},
    router::View,
    state::AppState,
};
use anyhow::{Context, Result};
use dialoguer::Password;
use shared::domain::requests::{ChangePasswordRequest, UpdateUserRequest, UserFilters};
use validator::Validate;

const ROUTE: &str = "/usuarios";
const EMPTY: &str = "No hay usuarios";

fn source(state: &AppState) -> UserSource {
    UserSource::new(state.di_container.user_service.clone())
}

pub async fn execute(state: &AppState, command: UserCommands) -> Result<()> {
    enter(state, ROUTE, View::Users)?;
    let service = &state.di_container.user_service;

    match command {
        UserCommands::List {
            page,
            email,
            first_name,
            last_name,
            active,
            dates: DateRangeArgs { from, to },
        } => {
            let filters = UserFilters {
                email,
                first_name,
                last_name,
                active,
                date_from: from,
                date_to: to,
            };
            list(state, filters, page).await
        }
        UserCommands::Get { id } => {
            let user = service.find_by_id(id).await?.data;
            print_rows(&[user], EMPTY);
            Ok(())
        }
        UserCommands::Active => {
            let users = service.find_active().await?.data;
            print_rows(&users, EMPTY);
            Ok(())
        }
        UserCommands::Create(args) => {
            let req = create_user_request(args)?;
            req.validate().context("Invalid user")?;

            let user = service.create(&req).await?.data;
            print_rows(&[user], EMPTY);
            Ok(())
        }
        UserCommands::Update {
            id,
            email,
            first_name,
            last_name,
            active,
        } => {
            let req = UpdateUserRequest {
                email,
                first_name,
                last_name,
                active,
            };
            let user = service.update(id, &req).await?.data;
            print_rows(&[user], EMPTY);
            Ok(())
        }
        UserCommands::Delete(args) => {
            let user = service.find_by_id(args.id).await?.data;
            let prompt = confirm_prompt(args.yes);

            let mut list = UserListController::new(source(state));
            let outcome = list.delete(args.id, &user.email, prompt.as_ref()).await;
            report_delete(outcome, "User")
        }
        UserCommands::ToggleStatus { id, active } => {
            let user = service.toggle_status(id, active).await?.data;
            print_rows(&[user], EMPTY);
            Ok(())
        }
        UserCommands::ChangePassword {
            id,
            current,
            new_password,
        } => {
            let current_password = match current {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Contraseña actual")
                    .interact()
                    .context("Failed to read password")?,
            };
            let new_password = match new_password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Nueva contraseña")
                    .with_confirmation("Repita la contraseña", "Las contraseñas no coinciden")
                    .interact()
                    .context("Failed to read password")?,
            };

            let req = ChangePasswordRequest {
                current_password,
                new_password,
            };
            req.validate().context("Invalid password change")?;

            let response = service.change_password(id, &req).await?;
            println!("{}", response.message);
            Ok(())
        }
    }
}

async fn list(state: &AppState, filters: UserFilters, page: PageArgs) -> Result<()> {
    let mut list = UserListController::new(source(state)).with_query(
        filters,
        page.sort,
        page.order.map(Into::into),
    );

    load_page(&mut list, page.page).await?;
    print_list(&list, EMPTY);
    Ok(())
}

pub async fn show_page(state: &AppState) -> Result<()> {
    let mut list = UserListController::new(source(state));
    load_page(&mut list, 1).await?;
    print_list(&list, EMPTY);
    Ok(())
}
