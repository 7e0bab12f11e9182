//! GTK4 display surface: a row container sink and add-item form wiring.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{AddItemForm, MountPoints, ShoppingListConfig, ShoppingListController, bootstrap};
use crate::error::ListResult;
use crate::render::{DisplaySink, ListRow, RowKind};

/// Sink that shows each row as a `gtk::Label` inside a vertical box.
#[derive(Debug, Clone)]
pub struct GtkListSink {
    container: gtk::Box,
}

impl GtkListSink {
    #[must_use]
    pub fn new(widget_name: &str) -> Self {
        let container = gtk::Box::new(gtk::Orientation::Vertical, 4);
        container.set_widget_name(widget_name);
        Self { container }
    }

    #[must_use]
    pub fn container(&self) -> &gtk::Box {
        &self.container
    }
}

impl DisplaySink for GtkListSink {
    fn clear_rows(&mut self) -> ListResult<()> {
        while let Some(child) = self.container.first_child() {
            self.container.remove(&child);
        }
        Ok(())
    }

    fn append_row(&mut self, row: &ListRow) -> ListResult<()> {
        let label = gtk::Label::new(Some(row.text.as_str()));
        label.set_xalign(0.0);
        if row.kind == RowKind::Summary {
            label.add_css_class("heading");
        }
        self.container.append(&label);
        Ok(())
    }
}

pub type SharedController = Rc<RefCell<ShoppingListController<GtkListSink>>>;

/// The three text inputs plus the submit button.
#[derive(Debug, Clone)]
pub struct AddItemFormWidgets {
    pub form: gtk::Box,
    pub name: gtk::Entry,
    pub quantity: gtk::Entry,
    pub price: gtk::Entry,
    pub submit: gtk::Button,
}

impl AddItemFormWidgets {
    #[must_use]
    pub fn new(mount_points: &MountPoints) -> Self {
        let form = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        form.set_widget_name(&mount_points.add_item_form);

        let name = labeled_entry(&mount_points.name_input, "Item name");
        let quantity = labeled_entry(&mount_points.quantity_input, "Quantity");
        let price = labeled_entry(&mount_points.price_input, "Price");
        let submit = gtk::Button::with_label("Add Item");

        form.append(&name);
        form.append(&quantity);
        form.append(&price);
        form.append(&submit);

        Self {
            form,
            name,
            quantity,
            price,
            submit,
        }
    }

    /// Snapshot of the current input text.
    #[must_use]
    pub fn read(&self) -> AddItemForm {
        AddItemForm::new(self.name.text(), self.quantity.text(), self.price.text())
    }

    /// Mirrors `form` back into the entries.
    pub fn write(&self, form: &AddItemForm) {
        self.name.set_text(&form.name);
        self.quantity.set_text(&form.quantity);
        self.price.set_text(&form.price);
    }

    /// Submits on button click and on Enter in any of the entries.
    pub fn connect_submit(&self, controller: &SharedController) {
        {
            let widgets = self.clone();
            let controller = Rc::clone(controller);
            self.submit
                .connect_clicked(move |_| submit_form(&widgets, &controller));
        }

        for entry in [&self.name, &self.quantity, &self.price] {
            let widgets = self.clone();
            let controller = Rc::clone(controller);
            entry.connect_activate(move |_| submit_form(&widgets, &controller));
        }
    }
}

/// Complete shopping-list view: the add-item form above the rendered rows.
#[derive(Debug, Clone)]
pub struct GtkShoppingListView {
    root: gtk::Box,
}

impl GtkShoppingListView {
    pub fn new(config: &ShoppingListConfig) -> ListResult<Self> {
        let sink = GtkListSink::new(&config.mount_points.list_container);
        let list_widget = sink.container().clone();
        let controller = Rc::new(RefCell::new(bootstrap(sink, config)?));

        let form = AddItemFormWidgets::new(&config.mount_points);
        form.connect_submit(&controller);

        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.set_margin_top(12);
        root.set_margin_bottom(12);
        root.set_margin_start(12);
        root.set_margin_end(12);
        root.append(&form.form);
        root.append(&list_widget);

        // The controller lives on in the submit handlers.
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &gtk::Box {
        &self.root
    }
}

fn labeled_entry(widget_name: &str, placeholder: &str) -> gtk::Entry {
    let entry = gtk::Entry::new();
    entry.set_widget_name(widget_name);
    entry.set_placeholder_text(Some(placeholder));
    entry
}

fn submit_form(widgets: &AddItemFormWidgets, controller: &SharedController) {
    let Ok(mut controller) = controller.try_borrow_mut() else {
        warn!("add-item submit ignored: controller busy");
        return;
    };

    let mut form = widgets.read();
    match form.submit(&mut *controller) {
        Ok(_) => widgets.write(&form),
        Err(err) => warn!(error = %err, "add-item submit failed"),
    }
}
