use gtk4 as gtk;
use gtk4::prelude::*;

use shopping_list::api::ShoppingListConfig;
use shopping_list::platform_gtk::GtkShoppingListView;
use shopping_list::telemetry::init_default_tracing;

fn main() {
    let _ = init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.shopping_list.desktop")
        .build();

    app.connect_activate(|app| {
        let view = match GtkShoppingListView::new(&ShoppingListConfig::default()) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to initialize shopping list: {err}");
                return;
            }
        };

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("Shopping List")
            .default_width(560)
            .default_height(420)
            .build();
        window.set_child(Some(view.root()));
        window.present();
    });

    let _ = app.run();
}
