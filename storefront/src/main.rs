//! hqdecor - HQ Decor storefront CLI
//!
//! Terminal front-end over the storefront core: browse the catalog, manage
//! the request list, and produce the inquiry handoffs.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use shared::models::{AddItemOptions, DeliveryOption, ProductType};
use storefront::cart::storage::CartStorage;
use storefront::{Catalog, CatalogQuery, RequestListManager, SortOrder, StoreConfig, inquiry};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hqdecor", version, about = "HQ Decor storefront")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the catalog with optional filters and price sort
    Shop {
        /// Keep products carrying at least one of these category tags
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Keep products of these types
        #[arg(long = "type", value_enum)]
        types: Vec<TypeArg>,
        /// Sort by price
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Show one product in detail
    Show { id: u32 },
    /// Add a product to the request list
    Add {
        id: u32,
        /// Finish/color choice
        #[arg(long)]
        variant: Option<String>,
        /// Inscription/style choice
        #[arg(long = "style")]
        text: Option<String>,
        /// Free-form note
        #[arg(long = "note")]
        custom: Option<String>,
    },
    /// Remove one entry from the request list
    Remove { cart_id: String },
    /// Print the request list
    List,
    /// Empty the request list
    Clear,
    /// Compile the inquiry and print the chosen handoff
    Send {
        #[arg(long, value_enum)]
        channel: ChannelArg,
        /// Delivery qualification (required before sending)
        #[arg(long, value_enum)]
        location: LocationArg,
    },
}

#[derive(Debug, Clone, ValueEnum)]
enum TypeArg {
    Decor,
    Tabletop,
    Wall,
    Accessory,
    Paper,
}

impl From<TypeArg> for ProductType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Decor => Self::Decor,
            TypeArg::Tabletop => Self::Tabletop,
            TypeArg::Wall => Self::Wall,
            TypeArg::Accessory => Self::Accessory,
            TypeArg::Paper => Self::Paper,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => Self::Ascending,
            SortArg::Desc => Self::Descending,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum ChannelArg {
    Email,
    Instagram,
}

#[derive(Debug, Clone, ValueEnum)]
enum LocationArg {
    /// Coppell / Valley Ranch (free delivery)
    Coppell,
    /// Other Texas location within ~1 hr drive (delivery fee)
    Texas,
    /// Pickup from Coppell
    Pickup,
}

impl From<LocationArg> for DeliveryOption {
    fn from(arg: LocationArg) -> Self {
        match arg {
            LocationArg::Coppell => Self::Coppell,
            LocationArg::Texas => Self::TexasDrive,
            LocationArg::Pickup => Self::Pickup,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env();
    let catalog = Catalog::builtin();
    let mut manager = RequestListManager::open(CartStorage::new(&config.data_dir));

    match cli.command {
        Command::Shop {
            categories,
            types,
            sort,
        } => {
            let query = CatalogQuery {
                categories,
                types: types.into_iter().map(Into::into).collect(),
                sort: sort.map(Into::into),
            };
            let products = query.apply(catalog.products());
            if products.is_empty() {
                println!("No products found matching your selection.");
            } else {
                for product in products {
                    println!(
                        "{:>3}  {:<28} ${:<6} {:<10} {}",
                        product.id,
                        product.name,
                        product.price,
                        product.product_type,
                        product.category.join(", ")
                    );
                }
            }
        }
        Command::Show { id } => match catalog.get(id) {
            Ok(product) => {
                println!("{} (${})", product.name, product.price);
                println!("Type: {}", product.product_type);
                println!("Categories: {}", product.category.join(", "));
                if let Some(variants) = &product.variants {
                    println!("Finishes: {}", variants.join(", "));
                }
                if let Some(options) = &product.text_options {
                    println!("Text options: {}", options.join(", "));
                }
                if let Some(description) = &product.description {
                    println!("\n{description}");
                }
            }
            Err(e) => println!("{e}"),
        },
        Command::Add {
            id,
            variant,
            text,
            custom,
        } => match catalog.get(id) {
            Ok(product) => {
                let cart_id = manager.add_item(
                    product,
                    AddItemOptions {
                        variant,
                        text,
                        custom,
                    },
                );
                println!("Added \"{}\" ({cart_id})\n", product.name);
                print_request_list(&manager);
            }
            Err(e) => println!("{e}"),
        },
        Command::Remove { cart_id } => {
            manager.remove_item(&cart_id);
            print_request_list(&manager);
        }
        Command::List => print_request_list(&manager),
        Command::Clear => {
            manager.clear();
            println!("Request list cleared.");
        }
        Command::Send { channel, location } => {
            let delivery: DeliveryOption = location.into();
            match channel {
                ChannelArg::Email => {
                    println!(
                        "{}",
                        inquiry::egress::email_link(&config, manager.items(), delivery)
                    );
                }
                ChannelArg::Instagram => {
                    let handoff =
                        inquiry::egress::instagram_handoff(&config, manager.items(), delivery);
                    println!("Copy the details below and paste them in our Instagram DM:\n");
                    println!("{}\n", handoff.clipboard_text);
                    println!("Open: {}", handoff.profile_url);
                }
            }
        }
    }

    Ok(())
}

fn print_request_list(manager: &RequestListManager) {
    println!("Your Request List ({})", manager.item_count());
    if manager.items().is_empty() {
        println!("Your list is empty.");
        return;
    }
    for item in manager.items() {
        println!("- {} (${})  [{}]", item.name, item.price, item.cart_id);
        if let Some(variant) = &item.selected_variant {
            println!("    Finish: {variant}");
        }
        if let Some(text) = &item.selected_text {
            println!("    Style: {text}");
        }
        if let Some(custom) = &item.custom_text {
            println!("    Note: {custom}");
        }
    }
    println!("\nTotal Value: ~${}", manager.subtotal());
}
