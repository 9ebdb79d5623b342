use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    AssetVisual, Catalog, Item, Result, ShowcaseError, SlideIndexController, SubscriptionId,
    VisualRegistry,
};

/// Pairs a controller index with its catalog entry.
///
/// The controller guarantees the index is in range, so a miss here means the
/// two have drifted apart and is reported as an invariant violation rather
/// than papered over with a default item.
pub fn resolve(catalog: &Catalog, index: usize) -> Result<&Item> {
    catalog
        .get(index)
        .ok_or(ShowcaseError::InvariantViolation {
            index,
            len: catalog.len(),
        })
}

/// The item a viewport is asked to display, with its position in the ring.
#[derive(Debug, Clone, Copy)]
pub struct Slide<'a> {
    pub index: usize,
    pub len: usize,
    pub item: &'a Item,
}

/// Rendering surface driven by the current slide. Implementations only read
/// the slide; they have no way back into the controller.
pub trait Viewport {
    fn show(&mut self, slide: Slide<'_>) -> Result<()>;
}

/// Text shown under the asset viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    pub description: String,
    /// One-based "k / N" indicator.
    pub position: String,
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.position, self.title)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// Viewport that keeps the last rendered caption.
#[derive(Debug, Default)]
pub struct CaptionViewport {
    caption: Option<Caption>,
    renders: usize,
}

impl CaptionViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl Viewport for CaptionViewport {
    fn show(&mut self, slide: Slide<'_>) -> Result<()> {
        self.caption = Some(Caption {
            title: slide.item.title.clone(),
            description: slide.item.description.clone(),
            position: format!("{} / {}", slide.index + 1, slide.len),
        });
        self.renders += 1;
        Ok(())
    }
}

/// Viewport that selects the 3D placeholder for the current asset.
#[derive(Debug)]
pub struct AssetViewport {
    registry: VisualRegistry,
    current: Option<AssetVisual>,
}

impl AssetViewport {
    pub fn new(registry: VisualRegistry) -> Self {
        Self {
            registry,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&AssetVisual> {
        self.current.as_ref()
    }
}

impl Viewport for AssetViewport {
    fn show(&mut self, slide: Slide<'_>) -> Result<()> {
        let visual = self.registry.resolve(slide.item)?;
        tracing::trace!(asset = %slide.item.id, color = %visual.color, "switching asset model");
        self.current = Some(visual.clone());
        Ok(())
    }
}

/// A carousel widget: a catalog, the controller indexing into it and the
/// viewports that follow the controller.
pub struct Showcase {
    catalog: Rc<Catalog>,
    controller: SlideIndexController,
    failures: Rc<RefCell<Vec<ShowcaseError>>>,
}

impl Showcase {
    /// Builds a carousel over `catalog`, clamping `initial` into range.
    pub fn new(catalog: Catalog, initial: isize) -> Result<Self> {
        let controller = SlideIndexController::new(catalog.len(), initial)?;
        Ok(Self {
            catalog: Rc::new(catalog),
            controller,
            failures: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn controller(&self) -> &SlideIndexController {
        &self.controller
    }

    pub fn current(&self) -> Result<&Item> {
        let index = self.controller.checked_index()?;
        resolve(&self.catalog, index)
    }

    /// Renders the current slide into `viewport` and keeps it in sync with
    /// every later change.
    pub fn attach<V>(&mut self, viewport: Rc<RefCell<V>>) -> Result<SubscriptionId>
    where
        V: Viewport + 'static,
    {
        render_into(&self.catalog, self.controller.current_index(), &*viewport)?;

        let catalog = Rc::clone(&self.catalog);
        let failures = Rc::clone(&self.failures);
        Ok(self.controller.subscribe(move |index| {
            if let Err(err) = render_into(&catalog, index, &*viewport) {
                tracing::warn!(index, error = %err, "viewport failed to render slide");
                failures.borrow_mut().push(err);
            }
        }))
    }

    pub fn detach(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe(id)
    }

    pub fn advance(&mut self) -> Result<&Item> {
        let index = self.controller.advance();
        resolve(&self.catalog, index)
    }

    pub fn retreat(&mut self) -> Result<&Item> {
        let index = self.controller.retreat();
        resolve(&self.catalog, index)
    }

    pub fn jump_to(&mut self, target: isize) -> Result<&Item> {
        let index = self.controller.jump_to(target)?;
        resolve(&self.catalog, index)
    }

    /// Drains the errors viewports reported while handling notifications.
    pub fn take_failures(&self) -> Vec<ShowcaseError> {
        self.failures.borrow_mut().drain(..).collect()
    }
}

impl fmt::Debug for Showcase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Showcase")
            .field("items", &self.catalog.len())
            .field("controller", &self.controller)
            .finish()
    }
}

fn render_into<V: Viewport>(catalog: &Catalog, index: usize, viewport: &RefCell<V>) -> Result<()> {
    let item = resolve(catalog, index)?;
    let mut viewport = viewport
        .try_borrow_mut()
        .map_err(|_| ShowcaseError::msg("viewport is already borrowed"))?;
    viewport.show(Slide {
        index,
        len: catalog.len(),
        item,
    })
}
