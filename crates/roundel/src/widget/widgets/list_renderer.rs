//! Sectioned list renderer with rounded section cards.
//!
//! [`ListRenderer`] answers the host table's data-source queries (counts,
//! cell-at, header/footer-at, will-display) from a [`ListModel`], dequeuing
//! recycled views from its catalogs and styling them so that each section
//! reads as a single rounded card. It also owns the collapse/expand flow:
//! toggles come either from [`ListRenderer::toggle`] or from expandable
//! header/footer views through their [`ToggleAction`](crate::widget::ToggleAction).
//!
//! # Example
//!
//! ```
//! use roundel::model::{Item, ListModel, Payload, Section};
//! use roundel::widget::widgets::ListRenderer;
//! use roundel::widget::{SupplementaryView, TableCell};
//!
//! struct Label(String);
//!
//! impl TableCell for Label {
//!     fn configure(&mut self, data: &Payload) {
//!         self.0 = data.downcast_ref::<&str>().copied().unwrap_or_default().to_string();
//!     }
//! }
//!
//! struct Title;
//!
//! impl SupplementaryView for Title {
//!     fn configure(&mut self, _data: Option<&Payload>) {}
//! }
//!
//! let model = ListModel::new(vec![
//!     Section::new(vec![Item::with_value("label", "Wi-Fi")]).with_header("title"),
//! ]);
//!
//! let mut renderer = ListRenderer::new(model);
//! renderer.register_cell("label", || Box::new(Label(String::new())));
//! renderer.register_supplementary("title", || Box::new(Title));
//!
//! assert_eq!(renderer.row_count(0).unwrap(), 1);
//! assert!(renderer.cell_at((0, 0).into()).is_ok());
//! assert!(renderer.header_at(0).unwrap().is_some());
//! assert!(renderer.footer_at(0).unwrap().is_none());
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use roundel_core::PerfSpan;
use roundel_core::logging::targets;

use crate::config::TableStyle;
use crate::error::Result;
use crate::model::{
    DefaultTableDelegate, IndexPath, ListModel, ModelSignals, ReuseCatalog, ReuseKey, RowUpdate,
    RowUpdateKind, Section, TableDelegate,
};
use crate::widget::corner;
use crate::widget::{
    SectionVisibility, SupplementaryView, TableCell, ToggleOutcome, ToggleQueue,
};

/// Height policy for a section header or footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionDimension {
    /// No view is declared; the host should use zero height.
    Hidden,
    /// A view is declared; the host should size it from its content.
    Automatic,
}

/// Which supplementary slot of a section a view occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot {
    Header,
    Footer,
}

/// A view currently handed out to the host, with the key it returns to.
struct Visible<V: ?Sized> {
    key: ReuseKey,
    view: Box<V>,
}

/// Data source for a sectioned table.
///
/// The renderer owns every view it hands out. The host refers to them by
/// index path (cells) or section index (headers and footers) and returns them
/// with the `end_displaying*` calls when they scroll off screen.
///
/// # Signals
///
/// Row updates, resets and toggles are reported through [`ModelSignals`],
/// available from [`signals()`](Self::signals).
pub struct ListRenderer {
    // Model
    model: ListModel,
    visibility: SectionVisibility,
    toggles: ToggleQueue,
    delegate: Arc<dyn TableDelegate>,
    style: TableStyle,

    // Reuse
    cells: ReuseCatalog<dyn TableCell>,
    supplementaries: ReuseCatalog<dyn SupplementaryView>,
    /// Whether each supplementary template takes part in rounding.
    rounding_templates: HashMap<ReuseKey, bool>,

    // On-screen views
    visible_cells: HashMap<IndexPath, Visible<dyn TableCell>>,
    visible_supplementaries: HashMap<(usize, Slot), Visible<dyn SupplementaryView>>,
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self::new(ListModel::default())
    }
}

impl ListRenderer {
    /// Creates a renderer over `model` with the default style and delegate.
    pub fn new(model: ListModel) -> Self {
        let style = TableStyle::default();
        Self {
            model,
            visibility: SectionVisibility::new(style.row_animation),
            toggles: ToggleQueue::new(),
            delegate: Arc::new(DefaultTableDelegate::new()),
            style,
            cells: ReuseCatalog::new(),
            supplementaries: ReuseCatalog::new(),
            rounding_templates: HashMap::new(),
            visible_cells: HashMap::new(),
            visible_supplementaries: HashMap::new(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the style using builder pattern.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Set the delegate using builder pattern.
    pub fn with_delegate(mut self, delegate: Arc<dyn TableDelegate>) -> Self {
        self.delegate = delegate;
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Returns the current style.
    pub fn style(&self) -> TableStyle {
        self.style
    }

    /// Replace the style. Applies to views styled after this call.
    pub fn set_style(&mut self, style: TableStyle) {
        self.visibility.set_animation(style.row_animation);
        self.style = style;
    }

    /// Replace the delegate.
    pub fn set_delegate(&mut self, delegate: Arc<dyn TableDelegate>) {
        self.delegate = delegate;
    }

    /// Register the factory for row views with reuse key `key`.
    pub fn register_cell<F>(&mut self, key: impl Into<ReuseKey>, factory: F)
    where
        F: Fn() -> Box<dyn TableCell> + Send + Sync + 'static,
    {
        self.cells.register_template(key, factory);
    }

    /// Register the factory for header/footer views with reuse key `key`.
    pub fn register_supplementary<F>(&mut self, key: impl Into<ReuseKey>, factory: F)
    where
        F: Fn() -> Box<dyn SupplementaryView> + Send + Sync + 'static,
    {
        let key = key.into();
        self.rounding_templates.remove(&key);
        self.supplementaries.register_template(key, factory);
    }

    // =========================================================================
    // Model
    // =========================================================================

    /// Returns the model.
    pub fn model(&self) -> &ListModel {
        &self.model
    }

    /// Returns the model's signals.
    pub fn signals(&self) -> &ModelSignals {
        self.model.signals()
    }

    /// Replace every section.
    ///
    /// All on-screen views are recycled and pending toggles are dropped; still
    /// valid collapsed sections stay collapsed.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        let _span = PerfSpan::new("ListRenderer::set_sections");
        self.recycle_all();
        self.visibility.reset();
        self.toggles.drain();
        self.model.set_sections(sections);
    }

    // =========================================================================
    // Data Source Queries
    // =========================================================================

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.model.section_count()
    }

    /// Number of rows shown in `section`; zero while it is collapsed.
    pub fn row_count(&self, section: usize) -> Result<usize> {
        report("row_count", self.model.row_count(section))
    }

    /// Height policy of the header of `section`.
    pub fn header_height(&self, section: usize) -> Result<SectionDimension> {
        report(
            "header_height",
            self.model.section(section).map(|s| dimension(s.has_header())),
        )
    }

    /// Height policy of the footer of `section`.
    pub fn footer_height(&self, section: usize) -> Result<SectionDimension> {
        report(
            "footer_height",
            self.model.section(section).map(|s| dimension(s.has_footer())),
        )
    }

    /// Dequeue and configure the cell for `path`.
    ///
    /// Corners are applied later by [`will_display`](Self::will_display). If a
    /// cell is already on screen at `path` it is recycled first.
    pub fn cell_at(&mut self, path: IndexPath) -> Result<&mut (dyn TableCell + 'static)> {
        report("cell_at", self.dequeue_cell(path))
    }

    /// Dequeue, style and configure the header of `section`.
    ///
    /// Returns `None` when the section declares no header.
    pub fn header_at(
        &mut self,
        section: usize,
    ) -> Result<Option<&mut (dyn SupplementaryView + 'static)>> {
        report("header_at", self.dequeue_supplementary(section, Slot::Header))
    }

    /// Dequeue, style and configure the footer of `section`.
    ///
    /// Returns `None` when the section declares no footer.
    pub fn footer_at(
        &mut self,
        section: usize,
    ) -> Result<Option<&mut (dyn SupplementaryView + 'static)>> {
        report("footer_at", self.dequeue_supplementary(section, Slot::Footer))
    }

    /// Style the cell at `path` for display and run the delegate's display
    /// hook. Dequeues the cell first if the host skipped [`cell_at`](Self::cell_at).
    pub fn will_display(&mut self, path: IndexPath) -> Result<()> {
        report("will_display", self.display_cell(path))
    }

    /// The on-screen cell at `path`, if any.
    pub fn visible_cell(&mut self, path: IndexPath) -> Option<&mut (dyn TableCell + 'static)> {
        self.visible_cells.get_mut(&path).map(|v| v.view.as_mut())
    }

    /// The on-screen header of `section`, if any.
    pub fn visible_header(
        &mut self,
        section: usize,
    ) -> Option<&mut (dyn SupplementaryView + 'static)> {
        self.visible_supplementaries
            .get_mut(&(section, Slot::Header))
            .map(|v| v.view.as_mut())
    }

    /// The on-screen footer of `section`, if any.
    pub fn visible_footer(
        &mut self,
        section: usize,
    ) -> Option<&mut (dyn SupplementaryView + 'static)> {
        self.visible_supplementaries
            .get_mut(&(section, Slot::Footer))
            .map(|v| v.view.as_mut())
    }

    /// Number of cells currently on screen.
    pub fn visible_cell_count(&self) -> usize {
        self.visible_cells.len()
    }

    // =========================================================================
    // Recycling
    // =========================================================================

    /// Return the cell at `path` to its pool. Returns false if none was shown.
    pub fn end_displaying(&mut self, path: IndexPath) -> bool {
        match self.visible_cells.remove(&path) {
            Some(visible) => {
                self.cells.recycle(visible.key, visible.view);
                true
            }
            None => false,
        }
    }

    /// Return the header of `section` to its pool.
    pub fn end_displaying_header(&mut self, section: usize) -> bool {
        self.end_displaying_supplementary(section, Slot::Header)
    }

    /// Return the footer of `section` to its pool.
    pub fn end_displaying_footer(&mut self, section: usize) -> bool {
        self.end_displaying_supplementary(section, Slot::Footer)
    }

    /// Pool sizes and total views built, for diagnostics.
    pub fn cell_catalog(&self) -> &ReuseCatalog<dyn TableCell> {
        &self.cells
    }

    // =========================================================================
    // Collapse / Expand
    // =========================================================================

    /// Toggle `section` between expanded and collapsed.
    ///
    /// On success the row update has been emitted through
    /// [`signals()`](Self::signals) and any on-screen header and footer have
    /// been restyled. Collapsing recycles the section's on-screen cells.
    pub fn toggle(&mut self, section: usize) -> Result<ToggleOutcome> {
        let outcome = report(
            "toggle",
            self.visibility.toggle(&mut self.model, section),
        )?;
        if let ToggleOutcome::Applied(update) = &outcome {
            self.after_toggle(update);
        }
        Ok(outcome)
    }

    /// Report that the host finished animating the last update of `section`.
    ///
    /// Applies a toggle that arrived during the animation, if any.
    pub fn finish_row_animation(&mut self, section: usize) -> Result<Option<RowUpdate>> {
        let update = report(
            "finish_row_animation",
            self.visibility.finish_animation(&mut self.model, section),
        )?;
        if let Some(update) = &update {
            self.after_toggle(update);
        }
        Ok(update)
    }

    /// Apply every toggle requested by expandable views since the last call.
    ///
    /// Requests for sections that no longer exist are logged and skipped.
    pub fn process_toggle_requests(&mut self) -> Vec<ToggleOutcome> {
        self.toggles
            .drain()
            .into_iter()
            .filter_map(|section| self.toggle(section).ok())
            .collect()
    }

    /// Number of toggle requests waiting for [`process_toggle_requests`](Self::process_toggle_requests).
    pub fn pending_toggle_requests(&self) -> usize {
        self.toggles.len()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn dequeue_cell(&mut self, path: IndexPath) -> Result<&mut (dyn TableCell + 'static)> {
        let item = self.model.item(path)?;
        let mut view = self.cells.dequeue(&item.id)?;
        self.delegate.configure_cell(view.as_mut(), item, path);

        let fresh = Visible {
            key: item.id.clone(),
            view,
        };
        let slot = match self.visible_cells.entry(path) {
            Entry::Occupied(mut occupied) => {
                let previous = occupied.insert(fresh);
                self.cells.recycle(previous.key, previous.view);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(fresh),
        };
        Ok(slot.view.as_mut())
    }

    fn dequeue_supplementary(
        &mut self,
        section: usize,
        slot: Slot,
    ) -> Result<Option<&mut (dyn SupplementaryView + 'static)>> {
        let declared = self.model.section(section)?;
        let key = match slot {
            Slot::Header => declared.header.clone(),
            Slot::Footer => declared.footer.clone(),
        };
        let Some(key) = key else {
            self.end_displaying_supplementary(section, slot);
            return Ok(None);
        };

        let mut view = self.supplementaries.dequeue(&key)?;
        self.style_supplementary(view.as_mut(), section, slot)?;

        let declared = &self.model.sections()[section];
        match slot {
            Slot::Header => self.delegate.configure_header(view.as_mut(), declared, section),
            Slot::Footer => self.delegate.configure_footer(view.as_mut(), declared, section),
        }

        let fresh = Visible { key, view };
        let stored = match self.visible_supplementaries.entry((section, slot)) {
            Entry::Occupied(mut occupied) => {
                let previous = occupied.insert(fresh);
                self.supplementaries.recycle(previous.key, previous.view);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(fresh),
        };
        Ok(Some(stored.view.as_mut()))
    }

    fn display_cell(&mut self, path: IndexPath) -> Result<()> {
        if !self.visible_cells.contains_key(&path) {
            self.dequeue_cell(path)?;
        }

        let row_count = self.model.row_count(path.section)?;
        let (has_header, has_footer) = self.section_rounding(path.section)?;
        let corners = corner::cell_corners(path.row, row_count, has_header, has_footer);
        let separator_hidden = corner::separator_hidden(path.row, row_count);
        let radius = self.style.corner_radius;

        let item = self.model.item(path)?;
        if let Some(visible) = self.visible_cells.get_mut(&path) {
            if let Some(rounded) = visible.view.as_roundable() {
                rounded.set_corners(corners, radius);
                rounded.set_separator_hidden(separator_hidden);
            }
            self.delegate.display(visible.view.as_mut(), item, path);
        }
        Ok(())
    }

    fn end_displaying_supplementary(&mut self, section: usize, slot: Slot) -> bool {
        match self.visible_supplementaries.remove(&(section, slot)) {
            Some(visible) => {
                self.supplementaries.recycle(visible.key, visible.view);
                true
            }
            None => false,
        }
    }

    fn after_toggle(&mut self, update: &RowUpdate) {
        let section = update.section;
        if update.kind == RowUpdateKind::Remove {
            let hidden: Vec<IndexPath> = self
                .visible_cells
                .keys()
                .filter(|path| path.section == section)
                .copied()
                .collect();
            for path in hidden {
                self.end_displaying(path);
            }
        }

        for slot in [Slot::Header, Slot::Footer] {
            let Some(mut visible) = self.visible_supplementaries.remove(&(section, slot)) else {
                continue;
            };
            if let Err(err) = self.style_supplementary(visible.view.as_mut(), section, slot) {
                tracing::warn!(target: targets::TABLE, section, %err, "failed to restyle after toggle");
            }
            self.visible_supplementaries.insert((section, slot), visible);
        }
    }

    /// Apply corners and the expandable binding to a header or footer.
    fn style_supplementary(
        &mut self,
        view: &mut dyn SupplementaryView,
        section: usize,
        slot: Slot,
    ) -> Result<()> {
        let visible_rows = self.model.row_count(section)?;
        let declared = self.model.section(section)?;
        let corners = match slot {
            Slot::Header => corner::header_corners(visible_rows, declared.has_footer()),
            Slot::Footer => corner::footer_corners(visible_rows, declared.has_header()),
        };
        let collapsed = self.model.is_collapsed(section);

        if let Some(rounded) = view.as_roundable() {
            rounded.set_corners(corners, self.style.corner_radius);
        }
        if let Some(expandable) = view.as_expandable() {
            expandable.set_toggle_action(self.toggles.action(section));
            expandable.update(collapsed);
        }
        tracing::trace!(target: targets::TABLE, section, ?slot, ?corners, collapsed, "styled supplementary view");
        Ok(())
    }

    /// Whether the header and footer of `section` take part in cell rounding.
    fn section_rounding(&mut self, section: usize) -> Result<(bool, bool)> {
        let declared = self.model.section(section)?;
        let header = declared.header.clone();
        let footer = declared.footer.clone();
        Ok((
            self.template_rounds(header.as_ref()),
            self.template_rounds(footer.as_ref()),
        ))
    }

    /// Whether views built from `key` expose the rounded capability.
    ///
    /// Checked once per template by building (or reusing) a view and returning
    /// it to the pool.
    fn template_rounds(&mut self, key: Option<&ReuseKey>) -> bool {
        let Some(key) = key else {
            return false;
        };
        if let Some(&rounds) = self.rounding_templates.get(key) {
            return rounds;
        }
        match self.supplementaries.dequeue(key) {
            Ok(mut sample) => {
                let rounds = sample.as_roundable().is_some();
                self.supplementaries.recycle(key.clone(), sample);
                self.rounding_templates.insert(key.clone(), rounds);
                rounds
            }
            Err(_) => false,
        }
    }

    fn recycle_all(&mut self) {
        for (_, visible) in self.visible_cells.drain() {
            self.cells.recycle(visible.key, visible.view);
        }
        for (_, visible) in self.visible_supplementaries.drain() {
            self.supplementaries.recycle(visible.key, visible.view);
        }
    }
}

impl std::fmt::Debug for ListRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListRenderer")
            .field("model", &self.model)
            .field("style", &self.style)
            .field("visible_cells", &self.visible_cells.len())
            .field("visible_supplementaries", &self.visible_supplementaries.len())
            .finish()
    }
}

fn dimension(declared: bool) -> SectionDimension {
    if declared {
        SectionDimension::Automatic
    } else {
        SectionDimension::Hidden
    }
}

/// Log a failed data-source query at `warn` and pass the result through.
fn report<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        tracing::warn!(target: targets::TABLE, operation, %err, "table query failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Payload, RowAnimation};
    use crate::widget::{CornerSet, Expandable, Rounded, RoundedCell, ToggleAction};
    use crate::TableError;
    use parking_lot::Mutex;

    /// What a view has been told, shared with the test through an `Arc`.
    #[derive(Debug, Default, Clone)]
    struct Styled {
        corners: Option<CornerSet>,
        toggle: Option<ToggleAction>,
        separator_hidden: Option<bool>,
        collapsed: Option<bool>,
        displays: usize,
        data: Option<String>,
    }

    type Log = Arc<Mutex<Vec<Arc<Mutex<Styled>>>>>;

    struct RoundCell(Arc<Mutex<Styled>>);

    impl TableCell for RoundCell {
        fn configure(&mut self, data: &Payload) {
            self.0.lock().data = data.downcast_ref::<&str>().map(|s| s.to_string());
        }

        fn display(&mut self) {
            self.0.lock().displays += 1;
        }

        fn as_roundable(&mut self) -> Option<&mut dyn RoundedCell> {
            Some(self)
        }
    }

    impl Rounded for RoundCell {
        fn set_corners(&mut self, corners: CornerSet, _radius: f32) {
            self.0.lock().corners = Some(corners);
        }
    }

    impl RoundedCell for RoundCell {
        fn set_separator_hidden(&mut self, hidden: bool) {
            self.0.lock().separator_hidden = Some(hidden);
        }
    }

    struct RoundHeader(Arc<Mutex<Styled>>);

    impl SupplementaryView for RoundHeader {
        fn configure(&mut self, data: Option<&Payload>) {
            self.0.lock().data = data
                .and_then(|d| d.downcast_ref::<&str>())
                .map(|s| s.to_string());
        }

        fn as_roundable(&mut self) -> Option<&mut dyn Rounded> {
            Some(self)
        }

        fn as_expandable(&mut self) -> Option<&mut dyn Expandable> {
            Some(self)
        }
    }

    impl Rounded for RoundHeader {
        fn set_corners(&mut self, corners: CornerSet, _radius: f32) {
            self.0.lock().corners = Some(corners);
        }
    }

    impl Expandable for RoundHeader {
        fn set_toggle_action(&mut self, action: ToggleAction) {
            self.0.lock().toggle = Some(action);
        }

        fn update(&mut self, collapsed: bool) {
            self.0.lock().collapsed = Some(collapsed);
        }
    }

    struct PlainFooter;

    impl SupplementaryView for PlainFooter {
        fn configure(&mut self, _data: Option<&Payload>) {}
    }

    fn rows(n: usize) -> Vec<Item> {
        (0..n).map(|_| Item::with_value("cell", "row")).collect()
    }

    fn renderer(sections: Vec<Section>, animation: RowAnimation) -> (ListRenderer, Log, Log) {
        let cells: Log = Arc::new(Mutex::new(Vec::new()));
        let headers: Log = Arc::new(Mutex::new(Vec::new()));

        let mut renderer = ListRenderer::new(ListModel::new(sections))
            .with_style(TableStyle::default().with_row_animation(animation));

        let cell_log = cells.clone();
        renderer.register_cell("cell", move || {
            let styled = Arc::new(Mutex::new(Styled::default()));
            cell_log.lock().push(styled.clone());
            Box::new(RoundCell(styled))
        });
        let header_log = headers.clone();
        renderer.register_supplementary("round", move || {
            let styled = Arc::new(Mutex::new(Styled::default()));
            header_log.lock().push(styled.clone());
            Box::new(RoundHeader(styled))
        });
        renderer.register_supplementary("plain", || Box::new(PlainFooter));

        (renderer, cells, headers)
    }

    fn display(renderer: &mut ListRenderer, path: IndexPath) {
        renderer.cell_at(path).unwrap();
        renderer.will_display(path).unwrap();
    }

    fn corners_of(log: &Log, index: usize) -> Option<CornerSet> {
        log.lock()[index].lock().corners
    }

    /// The one supplementary view that has been styled. Other views built from
    /// the same template are rounding samples sitting in the pool.
    fn shown(log: &Log) -> Arc<Mutex<Styled>> {
        let styled: Vec<_> = log
            .lock()
            .iter()
            .filter(|view| view.lock().corners.is_some())
            .cloned()
            .collect();
        assert_eq!(styled.len(), 1);
        styled[0].clone()
    }

    #[test]
    fn test_counts_and_heights() {
        let (renderer, _, _) = renderer(
            vec![
                Section::new(rows(2)).with_header("round"),
                Section::new(rows(0)).with_footer("plain"),
            ],
            RowAnimation::None,
        );

        assert_eq!(renderer.section_count(), 2);
        assert_eq!(renderer.row_count(0).unwrap(), 2);
        assert_eq!(renderer.row_count(1).unwrap(), 0);
        assert_eq!(renderer.row_count(2), Err(TableError::section_out_of_range(2, 2)));

        assert_eq!(renderer.header_height(0).unwrap(), SectionDimension::Automatic);
        assert_eq!(renderer.footer_height(0).unwrap(), SectionDimension::Hidden);
        assert_eq!(renderer.header_height(1).unwrap(), SectionDimension::Hidden);
        assert!(renderer.footer_height(3).is_err());
    }

    #[test]
    fn test_single_row_is_fully_rounded() {
        let (mut renderer, cells, _) = renderer(vec![Section::new(rows(1))], RowAnimation::None);
        display(&mut renderer, IndexPath::new(0, 0));

        let styled = cells.lock()[0].lock().clone();
        assert_eq!(styled.corners, Some(CornerSet::ALL));
        assert_eq!(styled.separator_hidden, Some(true));
        assert_eq!(styled.displays, 1);
        assert_eq!(styled.data.as_deref(), Some("row"));
    }

    #[test]
    fn test_plain_footer_does_not_take_part_in_rounding() {
        let (mut renderer, cells, _) = renderer(
            vec![Section::new(rows(2)).with_footer("plain")],
            RowAnimation::None,
        );
        display(&mut renderer, IndexPath::new(0, 0));
        display(&mut renderer, IndexPath::new(0, 1));

        assert_eq!(corners_of(&cells, 0), Some(CornerSet::TOP));
        assert_eq!(corners_of(&cells, 1), Some(CornerSet::BOTTOM));
    }

    #[test]
    fn test_declared_plain_footer_keeps_header_top() {
        let (mut renderer, _, headers) = renderer(
            vec![Section::new(rows(0)).with_header("round").with_footer("plain")],
            RowAnimation::None,
        );
        assert!(renderer.header_at(0).unwrap().is_some());
        assert_eq!(shown(&headers).lock().corners, Some(CornerSet::TOP));
    }

    #[test]
    fn test_declared_plain_header_keeps_footer_bottom() {
        let (mut renderer, _, footers) = renderer(
            vec![Section::new(rows(0)).with_header("plain").with_footer("round")],
            RowAnimation::None,
        );
        assert!(renderer.footer_at(0).unwrap().is_some());
        assert_eq!(shown(&footers).lock().corners, Some(CornerSet::BOTTOM));
    }

    #[test]
    fn test_visible_views_are_reachable_until_recycled() {
        let (mut renderer, cells, _) = renderer(
            vec![Section::new(rows(1)).with_header("round")],
            RowAnimation::None,
        );
        let path = IndexPath::new(0, 0);
        display(&mut renderer, path);
        renderer.header_at(0).unwrap();

        if let Some(cell) = renderer.visible_cell(path) {
            cell.display();
        }
        assert_eq!(cells.lock()[0].lock().displays, 2);
        assert!(renderer.visible_header(0).is_some());
        assert!(renderer.visible_footer(0).is_none());

        renderer.end_displaying(path);
        renderer.end_displaying_header(0);
        assert!(renderer.visible_cell(path).is_none());
        assert!(renderer.visible_header(0).is_none());
    }

    #[test]
    fn test_cell_errors() {
        let (mut renderer, _, _) = renderer(
            vec![Section::new(vec![Item::with_value("missing", ())])],
            RowAnimation::None,
        );

        assert_eq!(
            renderer.cell_at(IndexPath::new(0, 0)).err(),
            Some(TableError::unknown_reuse_key("missing"))
        );
        assert_eq!(
            renderer.cell_at(IndexPath::new(0, 1)).err(),
            Some(TableError::row_out_of_range(0, 1, 1))
        );
        assert_eq!(
            renderer.cell_at(IndexPath::new(4, 0)).err(),
            Some(TableError::section_out_of_range(4, 1))
        );
        assert_eq!(renderer.visible_cell_count(), 0);
    }

    #[test]
    fn test_recycling_reuses_views() {
        let (mut renderer, cells, _) = renderer(vec![Section::new(rows(3))], RowAnimation::None);

        display(&mut renderer, IndexPath::new(0, 0));
        assert!(renderer.end_displaying(IndexPath::new(0, 0)));
        assert!(!renderer.end_displaying(IndexPath::new(0, 0)));
        display(&mut renderer, IndexPath::new(0, 2));

        assert_eq!(cells.lock().len(), 1);
        assert_eq!(corners_of(&cells, 0), Some(CornerSet::BOTTOM));
        assert_eq!(renderer.cell_catalog().created_count(), 1);
    }

    #[test]
    fn test_requesting_same_path_twice_recycles_previous() {
        let (mut renderer, cells, _) = renderer(vec![Section::new(rows(1))], RowAnimation::None);

        renderer.cell_at(IndexPath::new(0, 0)).unwrap();
        renderer.cell_at(IndexPath::new(0, 0)).unwrap();

        assert_eq!(renderer.visible_cell_count(), 1);
        assert_eq!(cells.lock().len(), 2);
        assert_eq!(renderer.cell_catalog().pooled_count("cell"), 1);
    }

    #[test]
    fn test_collapse_restyles_header_and_recycles_cells() {
        let (mut renderer, _, headers) = renderer(
            vec![Section::new(rows(2)).with_header("round")],
            RowAnimation::None,
        );
        renderer.header_at(0).unwrap();
        display(&mut renderer, IndexPath::new(0, 0));
        display(&mut renderer, IndexPath::new(0, 1));

        let header = shown(&headers);
        assert_eq!(header.lock().corners, Some(CornerSet::TOP));
        assert_eq!(header.lock().collapsed, Some(false));

        let outcome = renderer.toggle(0).unwrap();
        assert_eq!(
            outcome,
            ToggleOutcome::Applied(RowUpdate::remove(0, 0..2, RowAnimation::None))
        );
        assert_eq!(renderer.row_count(0).unwrap(), 0);
        assert_eq!(renderer.visible_cell_count(), 0);
        assert_eq!(header.lock().corners, Some(CornerSet::ALL));
        assert_eq!(header.lock().collapsed, Some(true));

        renderer.toggle(0).unwrap();
        assert_eq!(renderer.row_count(0).unwrap(), 2);
        assert_eq!(header.lock().corners, Some(CornerSet::TOP));
        assert_eq!(header.lock().collapsed, Some(false));
    }

    #[test]
    fn test_toggle_requests_from_views() {
        let (mut renderer, _, headers) = renderer(
            vec![Section::new(rows(2)).with_header("round")],
            RowAnimation::None,
        );

        let received = Arc::new(Mutex::new(Vec::new()));
        let recv = received.clone();
        renderer.signals().rows_removed.connect(move |update| {
            recv.lock().push(update.rows.clone());
        });

        renderer.header_at(0).unwrap();
        let action = shown(&headers).lock().toggle.clone().unwrap();
        assert_eq!(action.section(), 0);

        assert!(action.trigger());
        assert_eq!(renderer.pending_toggle_requests(), 1);

        let outcomes = renderer.process_toggle_requests();
        assert_eq!(outcomes.len(), 1);
        assert!(renderer.model().is_collapsed(0));
        assert_eq!(*received.lock(), vec![0..2]);
        assert_eq!(renderer.pending_toggle_requests(), 0);
    }

    #[test]
    fn test_requests_for_removed_sections_are_skipped() {
        let (mut renderer, _, headers) = renderer(
            vec![
                Section::new(rows(1)).with_header("round"),
                Section::new(rows(1)).with_header("round"),
            ],
            RowAnimation::None,
        );
        renderer.header_at(1).unwrap();
        let action = shown(&headers).lock().toggle.clone().unwrap();

        renderer.set_sections(vec![Section::new(rows(1))]);
        assert!(action.trigger());

        assert!(renderer.process_toggle_requests().is_empty());
        assert!(!renderer.model().is_collapsed(0));
    }

    #[test]
    fn test_animated_toggle_waits_for_completion() {
        let (mut renderer, _, _) = renderer(vec![Section::new(rows(2))], RowAnimation::Fade);

        assert!(matches!(renderer.toggle(0).unwrap(), ToggleOutcome::Applied(_)));
        assert_eq!(renderer.toggle(0).unwrap(), ToggleOutcome::Deferred);
        assert!(renderer.model().is_collapsed(0));

        let applied = renderer.finish_row_animation(0).unwrap();
        assert_eq!(applied, Some(RowUpdate::insert(0, 0..2, RowAnimation::Fade)));
        assert_eq!(renderer.row_count(0).unwrap(), 2);
    }

    #[test]
    fn test_set_sections_recycles_and_keeps_valid_collapsed() {
        let (mut renderer, _, _) = renderer(
            vec![Section::new(rows(2)), Section::new(rows(2)), Section::new(rows(2))],
            RowAnimation::None,
        );
        renderer.toggle(0).unwrap();
        renderer.toggle(1).unwrap();
        display(&mut renderer, IndexPath::new(2, 0));
        assert_eq!(renderer.visible_cell_count(), 1);

        renderer.set_sections(vec![Section::new(rows(4))]);

        assert_eq!(renderer.visible_cell_count(), 0);
        assert_eq!(renderer.cell_catalog().pooled_count("cell"), 1);
        assert_eq!(renderer.model().collapsed_sections().collect::<Vec<_>>(), vec![0]);
        assert_eq!(renderer.row_count(0).unwrap(), 0);
    }
}
