//! Terminal rendering. Viewer-facing text is Spanish, like the menu itself.

#![allow(clippy::print_stdout)]

use lacapke_menu::{CartSummary, Level, MenuPage, Notification, Notifier, ProductView};

/// Prints notifications to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = match notification.level {
            Level::Success => "✓",
            Level::Error => "✗",
        };
        println!(
            "{marker} {}: {}",
            notification.title, notification.description
        );
    }
}

pub fn menu(page: &MenuPage) {
    for section in &page.sections {
        println!("\n== {} ==", section.title);
        for view in &section.items {
            println!("  {}", summary_line(view));
        }
    }

    println!();
    if page.cart_count > 0 {
        println!("Pedido: {} producto(s) [{}]", page.cart_count, page.cart_badge);
    }
    if page.is_admin {
        println!("Modo administrador: edición habilitada");
    }
}

pub fn product(view: &ProductView) {
    let item = &view.item;
    println!("{} ({})", item.name, item.id);
    println!("  {}", item.category.title());
    if !item.description.is_empty() {
        println!("  {}", item.description);
    }
    println!("  Imagen: {}", view.image);

    if item.variants.is_empty() {
        println!("  Precio: {}", price_label(view));
    } else {
        for variant in &item.variants {
            let selected = view
                .selected_variant
                .as_ref()
                .is_some_and(|v| v.name == variant.name);
            let marker = if selected { "*" } else { " " };
            println!("  {marker} {}: {}", variant.name, variant.price);
        }
    }
    if let Some(optional) = &item.optional {
        println!("  Opcional: {optional}");
    }
}

pub fn product_list(views: &[ProductView]) {
    for view in views {
        println!("{}", summary_line(view));
    }
}

pub fn cart(summary: &CartSummary) {
    if summary.entries.is_empty() {
        println!("Tu pedido está vacío");
        return;
    }

    for entry in &summary.entries {
        let variant = entry
            .variant
            .as_deref()
            .map(|v| format!(" ({v})"))
            .unwrap_or_default();
        println!(
            "{:>3} x {}{variant} @ {} = {}",
            entry.quantity,
            entry.name,
            entry.price,
            entry.line_total()
        );
    }
    println!("Productos: {}  Subtotal: {}", summary.total_count, summary.subtotal);
}

fn summary_line(view: &ProductView) -> String {
    let item = &view.item;
    let mut tags = Vec::new();
    if item.is_new {
        tags.push("nuevo");
    }
    if item.is_vegetarian {
        tags.push("veggie");
    }
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };
    format!(
        "{:<32} {:>10}  {}{tags}",
        item.name,
        price_label(view),
        item.id
    )
}

fn price_label(view: &ProductView) -> String {
    if view.orderable {
        view.price.to_string()
    } else {
        "consultar".to_string()
    }
}
