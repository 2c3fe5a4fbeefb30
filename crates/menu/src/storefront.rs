//! View binding layer.
//!
//! `Storefront` is constructed once per session and handed to whatever
//! renders the menu. It reads the stores to build view data, forwards user
//! actions to the right store, and reports outcomes through the injected
//! [`Notifier`] and [`Navigator`]. Editing actions require admin mode.

use std::sync::Arc;

use lacapke_core::{CartEntry, Category, MenuItem, MenuItemDraft, Price, ProductId, Variant};
use tracing::instrument;

use crate::cart::CartStore;
use crate::catalog::{CatalogError, CatalogStore, LoadSource};
use crate::config::MenuConfig;
use crate::error::{MenuError, Result};
use crate::images::resolve_image;
use crate::notify::{Navigator, Notification, Notifier, Route};
use crate::session::{CurrentUser, Session};
use crate::storage::KeyValueStore;

/// One item as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub item: MenuItem,
    /// Resolved, renderable image reference.
    pub image: String,
    /// Variant preselected when the item is opened.
    pub selected_variant: Option<Variant>,
    /// Unit price for the preselected variant (or the base price).
    pub price: Price,
    pub orderable: bool,
}

impl From<MenuItem> for ProductView {
    fn from(item: MenuItem) -> Self {
        let image = resolve_image(item.image.as_deref()).to_string();
        let selected_variant = item.default_variant().cloned();
        let price = selected_variant.as_ref().map_or(item.price, |v| v.price);
        let orderable = item.is_orderable();
        Self {
            item,
            image,
            selected_variant,
            price,
            orderable,
        }
    }
}

/// A titled group of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub category: Category,
    pub title: &'static str,
    pub items: Vec<ProductView>,
}

/// Everything the menu page needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPage {
    /// Non-empty sections in display order.
    pub sections: Vec<MenuSection>,
    pub cart_count: u32,
    pub cart_badge: String,
    pub is_admin: bool,
    /// How the catalog snapshot was obtained.
    pub source: LoadSource,
}

/// Cart contents with derived totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub entries: Vec<CartEntry>,
    pub total_count: u32,
    pub badge: String,
    pub subtotal: Price,
}

impl CartSummary {
    fn from_entries(entries: Vec<CartEntry>) -> Self {
        let total_count = CartStore::total_count(&entries);
        Self {
            badge: CartStore::badge_label(total_count),
            subtotal: CartStore::subtotal(&entries),
            entries,
            total_count,
        }
    }
}

/// An "add to order" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCart {
    pub product_id: ProductId,
    /// Variant name; defaults to the item's first variant.
    pub variant: Option<String>,
    pub quantity: u32,
}

impl AddToCart {
    /// Order one unit of the default variant.
    #[must_use]
    pub const fn one(product_id: ProductId) -> Self {
        Self {
            product_id,
            variant: None,
            quantity: 1,
        }
    }
}

/// Session-scoped binding of the stores to the view collaborators.
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartStore,
    session: Session,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("catalog", &self.catalog)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Storefront {
    /// Build a storefront whose stores all share `storage`.
    #[must_use]
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        config: &MenuConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::from_parts(
            CatalogStore::new(storage.clone()),
            CartStore::new(storage.clone()),
            Session::new(storage, config.admin_username.clone()),
            notifier,
            navigator,
        )
    }

    /// Build a storefront from already constructed stores.
    #[must_use]
    pub fn from_parts(
        catalog: CatalogStore,
        cart: CartStore,
        session: Session,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            catalog,
            cart,
            session,
            notifier,
            navigator,
        }
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    /// Load the catalog and cart and group items for the menu page.
    #[instrument(skip(self))]
    pub fn open_menu(&mut self) -> MenuPage {
        let load = self.catalog.load();
        if load.source == LoadSource::Reset {
            self.notifier.notify(Notification::success(
                "Productos actualizados",
                "El menú se actualizó a la última versión",
            ));
        }

        let sections = Category::DISPLAY_ORDER
            .into_iter()
            .filter_map(|category| {
                let items: Vec<ProductView> = load
                    .items
                    .iter()
                    .filter(|item| item.category == category)
                    .cloned()
                    .map(ProductView::from)
                    .collect();
                (!items.is_empty()).then_some(MenuSection {
                    category,
                    title: category.title(),
                    items,
                })
            })
            .collect();

        let cart = self.cart();
        MenuPage {
            sections,
            cart_count: cart.total_count,
            cart_badge: cart.badge,
            is_admin: self.session.is_admin(),
            source: load.source,
        }
    }

    /// One item prepared for its detail view.
    pub fn product(&mut self, id: &ProductId) -> Option<ProductView> {
        self.catalog.get(id).map(ProductView::from)
    }

    /// Items highlighted on the landing page.
    pub fn featured(&mut self) -> Vec<ProductView> {
        self.catalog
            .featured()
            .into_iter()
            .map(ProductView::from)
            .collect()
    }

    /// Current cart with totals.
    #[must_use]
    pub fn cart(&self) -> CartSummary {
        CartSummary::from_entries(self.cart.get_all())
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Add an item to the cart and return to the menu.
    ///
    /// # Errors
    ///
    /// - [`MenuError::UnknownProduct`] if the id is not in the catalog
    /// - [`MenuError::NotOrderable`] if the item has a zero price
    /// - [`MenuError::InvalidQuantity`] if `quantity` is zero
    /// - [`MenuError::UnknownVariant`] if the named variant does not exist
    ///
    /// The cart is unchanged on error.
    #[instrument(skip(self), fields(id = %request.product_id))]
    pub fn add_to_cart(&mut self, request: AddToCart) -> Result<CartSummary> {
        let Some(item) = self.catalog.get(&request.product_id) else {
            return Err(MenuError::UnknownProduct(request.product_id));
        };

        if !item.is_orderable() {
            self.notifier.notify(Notification::error(
                "No disponible",
                "Este producto no está disponible para pedidos online. Consultá en el local.",
            ));
            return Err(MenuError::NotOrderable(item.id));
        }

        if request.quantity == 0 {
            return Err(MenuError::InvalidQuantity);
        }

        let variant = if item.variants.is_empty() {
            if let Some(variant) = request.variant {
                return Err(MenuError::UnknownVariant { id: item.id, variant });
            }
            None
        } else {
            let chosen = match request.variant.as_deref() {
                Some(name) => item.variant(name),
                None => item.default_variant(),
            };
            let Some(chosen) = chosen else {
                return Err(MenuError::UnknownVariant {
                    id: item.id,
                    variant: request.variant.unwrap_or_default(),
                });
            };
            Some(chosen.clone())
        };

        let entry = CartEntry {
            id: item.id.clone(),
            name: item.name.clone(),
            price: variant.as_ref().map_or(item.price, |v| v.price),
            quantity: request.quantity,
            image: resolve_image(item.image.as_deref()).to_string(),
            variant: variant.map(|v| v.name),
        };

        let summary = CartSummary::from_entries(self.cart.add_item(entry));
        self.notifier.notify(Notification::success(
            "Agregado al pedido",
            format!("{} x {}", request.quantity, item.name),
        ));
        self.navigator.navigate(Route::Menu);
        Ok(summary)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in locally. Returns `None` for a blank username.
    pub fn login(&self, username: &str) -> Option<CurrentUser> {
        let user = self.session.login(username)?;
        self.notifier.notify(Notification::success(
            "Sesión iniciada",
            format!("Hola, {}", user.username),
        ));
        Some(user)
    }

    /// Log out locally.
    pub fn logout(&self) {
        self.session.logout();
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.session.current_user()
    }

    // =========================================================================
    // Editing (admin only)
    // =========================================================================

    /// Open an item in the editor.
    ///
    /// An id that is not in the catalog yields an unsaved draft with a
    /// title-cased name, zero price and an inferred category.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Forbidden`] outside admin mode.
    #[instrument(skip(self))]
    pub fn edit_product(&mut self, id: &ProductId) -> Result<MenuItem> {
        self.require_admin()?;

        Ok(self.catalog.get(id).unwrap_or_else(|| {
            let name = id.display_name();
            let category = CatalogStore::resolve_default_category(id, &name);
            tracing::debug!(%id, %category, "Opening draft for unknown product");
            MenuItem::new(id.clone(), name, Price::ZERO, category)
        }))
    }

    /// Save changes to an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Forbidden`] outside admin mode, or a catalog error
    /// if the item does not exist.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub fn save_product(&mut self, item: MenuItem) -> Result<Vec<MenuItem>> {
        self.require_admin()?;
        let result = self.catalog.update(item).map_err(MenuError::from);
        self.report(result, "Cambios guardados", "El producto se actualizó")
    }

    /// Create a new item from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Forbidden`] outside admin mode,
    /// [`MenuError::InvalidId`] if no id can be derived, or a catalog error if
    /// the id is taken.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn add_product(&mut self, draft: MenuItemDraft) -> Result<Vec<MenuItem>> {
        self.require_admin()?;
        let result = draft
            .into_item(CatalogStore::resolve_default_category)
            .map_err(MenuError::from)
            .and_then(|item| self.catalog.add(item).map_err(MenuError::from));
        self.report(result, "Producto agregado", "El nuevo producto ya está en el menú")
    }

    /// Remove an item.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Forbidden`] outside admin mode, or a catalog error
    /// if the item does not exist.
    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: &ProductId) -> Result<Vec<MenuItem>> {
        self.require_admin()?;
        let result = self.catalog.delete(id).map_err(MenuError::from);
        self.report(result, "Producto eliminado", "El producto se quitó del menú")
    }

    /// Restore the default menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Forbidden`] outside admin mode.
    #[instrument(skip(self))]
    pub fn reset_catalog(&mut self) -> Result<Vec<MenuItem>> {
        self.require_admin()?;
        let items = self.catalog.reset();
        self.report(
            Ok(items),
            "Menú restaurado",
            "Todos los productos volvieron a la última versión",
        )
    }

    fn require_admin(&self) -> Result<()> {
        if self.session.is_admin() {
            return Ok(());
        }
        tracing::warn!("Edit attempted outside admin mode");
        self.notifier.notify(Notification::error(
            "Modo administrador requerido",
            "Iniciá sesión como administrador para editar el menú",
        ));
        Err(MenuError::Forbidden)
    }

    /// Notify the outcome of an edit and pass the result through.
    fn report(
        &self,
        result: Result<Vec<MenuItem>>,
        title: &str,
        description: &str,
    ) -> Result<Vec<MenuItem>> {
        match &result {
            Ok(_) => self
                .notifier
                .notify(Notification::success(title, description)),
            Err(e) => self.notifier.notify(Notification::error(
                "No se pudieron guardar los cambios",
                failure_reason(e),
            )),
        }
        result
    }
}

/// Viewer-facing explanation of a failed edit.
const fn failure_reason(error: &MenuError) -> &'static str {
    match error {
        MenuError::Catalog(CatalogError::Duplicate(_)) => {
            "Ya existe un producto con ese identificador"
        }
        MenuError::Catalog(CatalogError::NotFound(_)) => "El producto no existe",
        MenuError::InvalidId(_) => "El nombre no genera un identificador válido",
        _ => "Intentá de nuevo en unos minutos",
    }
}
