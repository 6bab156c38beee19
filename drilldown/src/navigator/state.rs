use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::animation::Slide;
use crate::dataset::{Children, Dataset, Entry, Record};
use crate::element::{Content, Element};
use crate::templates::Config;
use crate::transitions::SlideConfig;
use crate::types::Size;

/// One rendered page: a snapshot element bound at navigation time,
/// plus the mapping from row element ids to entry indices. The map is
/// the component-owned replacement for walking a live tree looking
/// for attached data.
pub(crate) struct Page {
    pub element: Element,
    pub rows: HashMap<String, usize>,
}

pub(crate) enum Pending {
    /// Forward slide: nothing left to apply at commit.
    Reveal,
    /// Backward slide: the discarded deepest page is removed at commit.
    DropDeepest,
}

pub(crate) enum Phase {
    Idle,
    Sliding { slide: Slide, pending: Pending },
}

/// Stack-based navigator over a nested dataset. See the module docs.
pub struct Navigator {
    pub(crate) config: Config,
    dataset: Dataset,
    stack: Vec<Record>,
    /// Entry indices from the dataset root to the current page,
    /// parallel to `stack`.
    path: Vec<usize>,
    selected: Option<Record>,
    pub(crate) pages: Vec<Page>,
    pub(crate) phase: Phase,
    /// Committed strip offset while idle.
    strip_offset: i16,
    width: u16,
    speed: Duration,
}

impl Navigator {
    pub fn new(config: Config) -> Self {
        let width = config.width;
        let speed = config
            .speed
            .unwrap_or_else(|| Duration::from_millis((width / 2) as u64));
        Self {
            config,
            dataset: Vec::new(),
            stack: Vec::new(),
            path: Vec::new(),
            selected: None,
            pages: Vec::new(),
            phase: Phase::Idle,
            strip_offset: 0,
            width,
            speed,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// The currently selected terminal record, if a leaf page is showing.
    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    /// Entered link data, root first. Length equals navigation depth.
    pub fn stack(&self) -> &[Record] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self.phase, Phase::Sliding { .. })
    }

    /// Ordered row element ids of the current page. Empty on a detail page.
    pub fn row_ids(&self) -> Vec<String> {
        let Some(page) = self.pages.last() else {
            return Vec::new();
        };
        let Content::Children(children) = &page.element.content else {
            return Vec::new();
        };
        children
            .iter()
            .filter(|c| c.clickable)
            .map(|c| c.id.clone())
            .collect()
    }

    /// (Re)initialize from a dataset: clear the stack and selection,
    /// discard rendered pages, render the root page and slide it in.
    pub fn reset(&mut self, dataset: Dataset) {
        debug!("navigator reset: {} root entries", dataset.len());
        if self.selected.take().is_some() {
            self.notify_select(None);
        }
        self.dataset = dataset;
        self.stack.clear();
        self.path.clear();

        let root = self.build_links_page(&[]);
        self.pages = vec![root];

        // The root page enters from the right edge, like every other page.
        self.strip_offset = self.width as i16;
        self.begin_slide(0, Pending::Reveal);
    }

    /// Return to the root of the original dataset.
    pub fn go_start(&mut self) {
        let dataset = self.dataset.clone();
        self.reset(dataset);
    }

    /// Pop one level. Returns false (and does nothing) when the stack
    /// is empty or a slide is already in flight.
    pub fn back(&mut self) -> bool {
        self.tick();
        if self.is_sliding() {
            log::trace!("back dropped: slide in flight");
            return false;
        }
        if self.stack.is_empty() {
            return false;
        }

        if self.selected.take().is_some() {
            self.notify_select(None);
        }
        self.stack.pop();
        self.path.pop();
        debug!("navigator back to depth {}", self.stack.len());

        let target = -((self.pages.len() as i16 - 2) * self.width as i16);
        self.begin_slide(target, Pending::DropDeepest);
        true
    }

    /// Enter the entry at `index` on the current page. Called by event
    /// routing once a click has been resolved to a row.
    pub(crate) fn navigate(&mut self, index: usize) {
        let entries = entries_at(&self.dataset, &self.path);
        let Some(entry) = entries.get(index) else {
            return;
        };
        let entry = entry.clone();

        self.stack.push(entry.link.clone());
        self.path.push(index);

        let page = match &entry.children {
            Children::Branch(_) => {
                debug!("navigator enter branch at depth {}", self.stack.len());
                self.build_links_page(&self.path)
            }
            Children::Leaf(record) => {
                debug!("navigator select leaf at depth {}", self.stack.len());
                self.selected = Some(record.clone());
                let record = record.clone();
                self.notify_select(Some(&record));
                self.build_detail_page(&record)
            }
        };
        self.pages.push(page);

        let target = -((self.pages.len() as i16 - 1) * self.width as i16);
        self.begin_slide(target, Pending::Reveal);
    }

    /// Commit a completed slide: apply the deferred state change and
    /// re-enable input. Returns true while a slide remains active.
    pub fn tick(&mut self) -> bool {
        let Phase::Sliding { slide, pending } = &self.phase else {
            return false;
        };
        let now = Instant::now();
        if !slide.is_complete(now) {
            return true;
        }

        self.strip_offset = slide.target();
        if matches!(pending, Pending::DropDeepest) {
            self.pages.pop();
        }
        self.phase = Phase::Idle;
        debug!("slide committed at offset {}", self.strip_offset);
        false
    }

    /// Strip offset to render at, sampling the slide when one is active.
    pub(crate) fn current_offset(&self) -> i16 {
        match &self.phase {
            Phase::Sliding { slide, .. } => slide.offset(Instant::now()),
            Phase::Idle => self.strip_offset,
        }
    }

    pub(crate) fn current_rows(&self) -> Option<&HashMap<String, usize>> {
        self.pages.last().map(|p| &p.rows)
    }

    fn begin_slide(&mut self, target: i16, pending: Pending) {
        let slide = Slide::begin(
            self.strip_offset,
            target,
            SlideConfig::new(self.speed, self.config.easing),
        );
        self.phase = Phase::Sliding { slide, pending };
    }

    fn notify_select(&mut self, record: Option<&Record>) {
        if let Some(on_select) = &mut self.config.on_select {
            on_select(record);
        }
    }

    fn build_links_page(&self, path: &[usize]) -> Page {
        let entries = entries_at(&self.dataset, path);
        let mut rows = HashMap::with_capacity(entries.len());
        let mut children = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let bound = self.config.base_model.merged(&entry.link);
            let row = (self.config.templates.link)(&bound).clickable(true);
            rows.insert(row.id.clone(), i);
            children.push(row);
        }

        let element = Element::col()
            .width(Size::Fixed(self.width))
            .height(Size::Fill)
            .children(children);
        Page { element, rows }
    }

    fn build_detail_page(&self, record: &Record) -> Page {
        let bound = self.config.base_model.merged(record);
        let element = (self.config.templates.last)(&bound)
            .width(Size::Fixed(self.width))
            .height(Size::Fill);
        Page {
            element,
            rows: HashMap::new(),
        }
    }
}

/// Walk the dataset along an index path, yielding the entries of the
/// branch the path ends in. A path ending in a leaf yields no entries.
fn entries_at<'a>(dataset: &'a [Entry], path: &[usize]) -> &'a [Entry] {
    let mut current = dataset;
    for &index in path {
        match current.get(index).map(|e| &e.children) {
            Some(Children::Branch(next)) => current = next,
            _ => return &[],
        }
    }
    current
}
