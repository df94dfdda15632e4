//! Category command handlers

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::FlowResult;
use crate::models::{Category, CategoryId, CategoryPatch};
use crate::store::Tracker;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Icon tag
        #[arg(short, long, default_value = "more-horizontal")]
        icon: String,
        /// Display color (hex)
        #[arg(short, long, default_value = "#94A3B8")]
        color: String,
        /// Monthly budget in USD
        #[arg(short, long)]
        budget: Option<f64>,
    },

    /// Edit an existing category
    Edit {
        /// Category id
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New icon tag
        #[arg(short, long)]
        icon: Option<String>,
        /// New display color (hex)
        #[arg(short, long)]
        color: Option<String>,
        /// New monthly budget in USD
        #[arg(short, long)]
        budget: Option<f64>,
    },

    /// Delete a category by id
    Delete {
        /// Category id
        id: String,
    },
}

/// Handle a category subcommand
pub fn handle_category_command(tracker: &Tracker, cmd: CategoryCommands) -> FlowResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!(
                "{}",
                format_category_list(&tracker.categories(), tracker.currency())
            );
        }
        CategoryCommands::Add {
            name,
            icon,
            color,
            budget,
        } => {
            let mut category = Category::new(name, icon, color);
            category.budget = budget;
            let category = tracker.add_category(category)?;
            println!("Added category '{}' (id: {})", category.name, category.id);
        }
        CategoryCommands::Edit {
            id,
            name,
            icon,
            color,
            budget,
        } => {
            let id = CategoryId::from_string(id);
            let known = tracker.find_category(&id).is_some();

            tracker.update_category(
                &id,
                CategoryPatch {
                    name,
                    icon,
                    color,
                    budget: budget.map(Some),
                },
            );

            if known {
                println!("Updated category {}", id);
            } else {
                println!("No category with id {} (nothing updated)", id);
            }
        }
        CategoryCommands::Delete { id } => {
            let id = CategoryId::from_string(id);
            let known = tracker.find_category(&id).is_some();

            tracker.delete_category(&id);

            if known {
                println!("Deleted category {}", id);
                println!("Note: expenses keep their category name; they are not repointed.");
            } else {
                println!("No category with id {} (nothing deleted)", id);
            }
        }
    }
    Ok(())
}
