//! Command-line interface definition

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "veranda", version, about = "Table-ordering client")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "VERANDA_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Live notification channel address (host:port)
    #[arg(long, env = "VERANDA_LIVE_ADDR")]
    pub live_addr: Option<String>,

    /// Session store file
    #[arg(long, env = "VERANDA_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Log filter (e.g. info, samovar_client=debug)
    #[arg(long, env = "VERANDA_LOG")]
    pub log_level: Option<String>,

    /// Write daily rolling logs into this directory
    #[arg(long, env = "VERANDA_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with username and password
    Login {
        username: String,
        password: String,
    },
    /// Register a new account
    Register {
        username: String,
        password: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the authenticated user
    Me,
    /// Resolve a table short code and make it the current table
    Scan { code: String },
    /// Show the table link and QR image URL for a short code
    Qr { code: String },
    /// Show the menu for the current restaurant
    Menu,
    /// List the restaurant's seating zones
    Zones,
    /// Call a waiter to the current table
    CallWaiter {
        #[arg(long)]
        message: Option<String>,
    },
    /// Manage the cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Show the current check (subtotal and service fee, no tip)
    Check,
    /// Place the cart as an order and pay it
    Checkout(CheckoutArgs),
    /// Order queries
    #[command(subcommand)]
    Orders(OrdersCommand),
    /// Waiter workflows
    #[command(subcommand)]
    Waiter(WaiterCommand),
    /// Create a reservation
    Reserve(ReserveArgs),
    /// List reservations
    Reservations,
    /// Restaurant management
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Role-gated dashboard entry point
    Dashboard,
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Add one unit of a dish by id
    Add { dish_id: i64 },
    /// Show cart lines and totals
    Show,
    /// Change a line's quantity by delta (line removed at zero)
    Update { index: usize, delta: i32 },
    /// Remove a line
    Remove { index: usize },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Tip as a percent of the subtotal
    #[arg(long, conflicts_with = "tip_amount")]
    pub tip_percent: Option<u8>,
    /// Tip as a fixed amount in minor currency units
    #[arg(long)]
    pub tip_amount: Option<i64>,
    /// Payment method label passed through to the backend
    #[arg(long)]
    pub payment_method: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// Orders placed by the authenticated user
    My,
    /// Active order for the current table
    Current,
    /// Set an order's status
    SetStatus { order_id: i64, status: String },
}

#[derive(Debug, Subcommand)]
pub enum WaiterCommand {
    /// Pending waiter calls
    Calls,
    /// Mark a waiter call resolved
    Resolve { call_id: i64 },
    /// Order queue for the restaurant
    Orders,
    /// Follow live waiter-call and order events until Ctrl-C
    Listen,
}

#[derive(Debug, Args)]
pub struct ReserveArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    /// Date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// Time, HH:MM
    #[arg(long)]
    pub time: String,
    #[arg(long, default_value_t = 2)]
    pub party_size: i32,
    #[arg(long)]
    pub zone_id: Option<i64>,
    #[arg(long)]
    pub table_id: Option<i64>,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Today's analytics overview
    Analytics,
    /// Generate a short link and QR for a table
    Link { hall_id: i64, table_id: i64 },
    /// Set a table's status
    TableStatus { table_id: i64, status: String },
    /// Put a dish on or off the stop list
    StopList {
        dish_id: i64,
        #[arg(long)]
        off: bool,
    },
    /// Create a dish
    DishAdd {
        #[arg(long)]
        category_id: i64,
        #[arg(long)]
        name: String,
        /// Price in minor currency units
        #[arg(long)]
        price: i64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Update a dish
    DishUpdate {
        dish_id: i64,
        #[arg(long)]
        name: Option<String>,
        /// Price in minor currency units
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        available: Option<bool>,
    },
    /// Delete a dish
    DishDelete { dish_id: i64 },
    /// Create a menu category
    CategoryAdd {
        #[arg(long)]
        name: String,
        #[arg(long)]
        position: Option<i32>,
    },
    /// Update a menu category
    CategoryUpdate {
        category_id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        position: Option<i32>,
    },
}
