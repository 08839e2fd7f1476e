use crate::{
    cli::{
        DateRangeArgs, PageArgs, ProductCommands, check_load, confirm_prompt, enter, load_page,
        print_list, print_rows, report_delete,
    },
    controller::{ProductFormController, ProductListController, ProductSource},
    router::View,
    state::AppState,
};
use anyhow::Result;
use shared::domain::requests::ProductFilters;

const ROUTE: &str = "/productos";
const EMPTY: &str = "No hay productos";

fn source(state: &AppState) -> ProductSource {
    ProductSource::new(state.di_container.product_service.clone())
}

pub async fn execute(state: &AppState, command: ProductCommands) -> Result<()> {
    enter(state, ROUTE, View::Products)?;
    let service = &state.di_container.product_service;

    match command {
        ProductCommands::List {
            page,
            name,
            category,
            price_min,
            price_max,
            stock_min,
            active,
            dates: DateRangeArgs { from, to },
        } => {
            let filters = ProductFilters {
                name,
                category_id: category,
                price_min,
                price_max,
                stock_min,
                active,
                date_from: from,
                date_to: to,
            };
            list(state, filters, page).await
        }
        ProductCommands::Get { id } => {
            let product = service.find_by_id(id).await?.data;
            print_rows(&[product], EMPTY);
            Ok(())
        }
        ProductCommands::Active => {
            let products = service.find_active().await?.data;
            print_rows(&products, EMPTY);
            Ok(())
        }
        ProductCommands::ByCategory { category_id } => {
            let products = service.find_by_category(category_id).await?.data;
            print_rows(&products, EMPTY);
            Ok(())
        }
        ProductCommands::Create {
            name,
            description,
            price,
            stock,
            category,
            inactive,
        } => {
            let mut form = ProductFormController::new(source(state));
            form.open_create();

            let draft = form.draft_mut();
            draft.name = name;
            draft.description = description.unwrap_or_default();
            draft.price = price;
            draft.stock = stock;
            draft.category_id = Some(category);
            draft.active = !inactive;

            let mut list = ProductListController::new(source(state));
            check_load(form.submit(&mut list).await?)?;
            println!("Product saved");
            print_list(&list, EMPTY);
            Ok(())
        }
        ProductCommands::Update {
            id,
            name,
            description,
            price,
            stock,
            category,
            active,
        } => {
            let current = service.find_by_id(id).await?.data;

            let mut form = ProductFormController::new(source(state));
            form.open_edit(&current);

            let draft = form.draft_mut();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            if let Some(stock) = stock {
                draft.stock = stock;
            }
            if category.is_some() {
                draft.category_id = category;
            }
            if let Some(active) = active {
                draft.active = active;
            }

            let mut list = ProductListController::new(source(state));
            check_load(form.submit(&mut list).await?)?;
            println!("Product {id} updated");
            print_list(&list, EMPTY);
            Ok(())
        }
        ProductCommands::Delete(args) => {
            let product = service.find_by_id(args.id).await?.data;
            let prompt = confirm_prompt(args.yes);

            let mut list = ProductListController::new(source(state));
            let outcome = list.delete(args.id, &product.name, prompt.as_ref()).await;
            report_delete(outcome, "Product")
        }
    }
}

async fn list(state: &AppState, filters: ProductFilters, page: PageArgs) -> Result<()> {
    let mut list = ProductListController::new(source(state)).with_query(
        filters,
        page.sort,
        page.order.map(Into::into),
    );

    load_page(&mut list, page.page).await?;
    print_list(&list, EMPTY);
    Ok(())
}

pub async fn show_page(state: &AppState) -> Result<()> {
    let mut list = ProductListController::new(source(state));
    load_page(&mut list, 1).await?;
    print_list(&list, EMPTY);
    Ok(())
}
