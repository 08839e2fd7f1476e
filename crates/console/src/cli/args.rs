use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use shared::domain::requests::SortOrder;

/// catalog-console - administration console for the catalog API
#[derive(Parser, Debug)]
#[command(name = "catalog-console")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and keep the session on disk
    Login {
        #[arg(short, long)]
        user: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Create a new account
    Register(RegisterArgs),
    /// Print the sidebar menu
    Nav {
        /// Terminal width used to pick the mobile layout
        #[arg(long, default_value_t = 1280)]
        width: u32,
    },
    /// Resolve a route and show the page it lands on
    Open { path: String },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long = "nombre")]
    pub first_name: String,
    #[arg(long = "apellido")]
    pub last_name: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,
}

#[derive(Args, Debug, Clone)]
pub struct DateRangeArgs {
    /// Lower bound on the creation date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Upper bound on the creation date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    pub id: i32,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Paged list with optional filters
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        dates: DateRangeArgs,
    },
    Get { id: i32 },
    /// Only active categories
    Active,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete(DeleteArgs),
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Paged list with optional filters
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<i32>,
        #[arg(long)]
        price_min: Option<f64>,
        #[arg(long)]
        price_max: Option<f64>,
        #[arg(long)]
        stock_min: Option<i32>,
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        dates: DateRangeArgs,
    },
    Get { id: i32 },
    /// Only active products
    Active,
    /// Products of one category
    ByCategory { category_id: i32 },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value_t = 0)]
        stock: i32,
        #[arg(long)]
        category: i32,
        #[arg(long)]
        inactive: bool,
    },
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        stock: Option<i32>,
        #[arg(long)]
        category: Option<i32>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete(DeleteArgs),
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Paged list with optional filters
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "nombre")]
        first_name: Option<String>,
        #[arg(long = "apellido")]
        last_name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        dates: DateRangeArgs,
    },
    Get { id: i32 },
    /// Only active users
    Active,
    Create(RegisterArgs),
    Update {
        id: i32,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "nombre")]
        first_name: Option<String>,
        #[arg(long = "apellido")]
        last_name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete(DeleteArgs),
    /// Enable or disable an account
    ToggleStatus {
        id: i32,
        #[arg(long, action = ArgAction::Set)]
        active: bool,
    },
    ChangePassword {
        id: i32,
        #[arg(long)]
        current: Option<String>,
        #[arg(long = "new")]
        new_password: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_filters() {
        let cli = Cli::try_parse_from([
            "catalog-console",
            "products",
            "list",
            "--page",
            "2",
            "--category",
            "3",
            "--order",
            "desc",
        ])
        .unwrap();

        match cli.command {
            Commands::Products {
                command:
                    ProductCommands::List {
                        page, category, ..
                    },
            } => {
                assert_eq!(page.page, 2);
                assert_eq!(page.order, Some(OrderArg::Desc));
                assert_eq!(category, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn toggle_status_requires_explicit_value() {
        assert!(
            Cli::try_parse_from(["catalog-console", "users", "toggle-status", "4"]).is_err()
        );

        let cli = Cli::try_parse_from([
            "catalog-console",
            "users",
            "toggle-status",
            "4",
            "--active",
            "false",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Users {
                command: UserCommands::ToggleStatus { id: 4, active: false }
            }
        ));
    }
}
