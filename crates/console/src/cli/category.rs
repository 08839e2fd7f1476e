use crate::{
    cli::{
        CategoryCommands, DateRangeArgs, PageArgs, check_load, confirm_prompt, enter, load_page,
        print_list, print_rows, report_delete,
    },
    controller::{CategoryFormController, CategoryListController, CategorySource},
    router::View,
    state::AppState,
};
use anyhow::Result;
use shared::domain::requests::CategoryFilters;

const ROUTE: &str = "/categorias";
const EMPTY: &str = "No hay categorías";

fn source(state: &AppState) -> CategorySource {
    CategorySource::new(state.di_container.category_service.clone())
}

pub async fn execute(state: &AppState, command: CategoryCommands) -> Result<()> {
    enter(state, ROUTE, View::Categories)?;
    let service = &state.di_container.category_service;

    match command {
        CategoryCommands::List {
            page,
            name,
            active,
            dates: DateRangeArgs { from, to },
        } => {
            let filters = CategoryFilters {
                name,
                active,
                date_from: from,
                date_to: to,
            };
            list(state, filters, page).await
        }
        CategoryCommands::Get { id } => {
            let category = service.find_by_id(id).await?.data;
            print_rows(&[category], EMPTY);
            Ok(())
        }
        CategoryCommands::Active => {
            let categories = service.find_active().await?.data;
            print_rows(&categories, EMPTY);
            Ok(())
        }
        CategoryCommands::Create {
            name,
            description,
            inactive,
        } => {
            let mut form = CategoryFormController::new(source(state));
            form.open_create();

            let draft = form.draft_mut();
            draft.name = name;
            draft.description = description.unwrap_or_default();
            draft.active = !inactive;

            let mut list = CategoryListController::new(source(state));
            check_load(form.submit(&mut list).await?)?;
            println!("Category saved");
            print_list(&list, EMPTY);
            Ok(())
        }
        CategoryCommands::Update {
            id,
            name,
            description,
            active,
        } => {
            let current = service.find_by_id(id).await?.data;

            let mut form = CategoryFormController::new(source(state));
            form.open_edit(&current);

            let draft = form.draft_mut();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(active) = active {
                draft.active = active;
            }

            let mut list = CategoryListController::new(source(state));
            check_load(form.submit(&mut list).await?)?;
            println!("Category {id} updated");
            print_list(&list, EMPTY);
            Ok(())
        }
        CategoryCommands::Delete(args) => {
            let category = service.find_by_id(args.id).await?.data;
            let prompt = confirm_prompt(args.yes);

            let mut list = CategoryListController::new(source(state));
            let outcome = list.delete(args.id, &category.name, prompt.as_ref()).await;
            report_delete(outcome, "Category")
        }
    }
}

async fn list(state: &AppState, filters: CategoryFilters, page: PageArgs) -> Result<()> {
    let mut list = CategoryListController::new(source(state)).with_query(
        filters,
        page.sort,
        page.order.map(Into::into),
    );

    load_page(&mut list, page.page).await?;
    print_list(&list, EMPTY);
    Ok(())
}

pub async fn show_page(state: &AppState) -> Result<()> {
    let mut list = CategoryListController::new(source(state));
    load_page(&mut list, 1).await?;
    print_list(&list, EMPTY);
    Ok(())
}
