use std::sync::Arc;

use crate::chart::{ProportionChart, compute_distribution, compute_stats};
use crate::color::ColorMap;
use crate::data::filter::select_names;
use crate::data::model::{Dataset, TypeTag};
use crate::table::render_table;

// ---------------------------------------------------------------------------
// Pokémon selector: dropdown options derived from the type filter
// ---------------------------------------------------------------------------

/// Options and current value of the Pokémon dropdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonSelector {
    pub options: Vec<String>,
    /// `None` means nothing is selected.
    pub selected: Option<String>,
}

impl PokemonSelector {
    /// Fresh selector for `tag`, defaulting to its first name.
    pub fn for_type(dataset: &Dataset, tag: TypeTag) -> Self {
        let options = select_names(dataset, tag);
        let selected = options.first().cloned();
        Self { options, selected }
    }

    /// Switch to `name` if it is one of the options. Returns whether it did.
    pub fn choose(&mut self, name: &str) -> bool {
        if self.options.iter().any(|o| o == name) {
            self.selected = Some(name.to_string());
            true
        } else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Dependency graph between views
// ---------------------------------------------------------------------------

/// A recomputable node of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    TypeFilter,
    Selector,
    Stats,
    Distribution,
}

impl Node {
    /// Nodes in topological order.
    pub const ORDER: [Node; 4] = [Node::TypeFilter, Node::Selector, Node::Stats, Node::Distribution];

    /// Nodes that read this node's output directly.
    pub fn dependents(self) -> &'static [Node] {
        match self {
            Node::TypeFilter => &[Node::Selector],
            Node::Selector => &[Node::Stats, Node::Distribution],
            Node::Stats | Node::Distribution => &[],
        }
    }

    /// `self` followed by everything downstream of it, in topological order.
    pub fn downstream(self) -> Vec<Node> {
        let mut dirty = vec![self];
        for node in Node::ORDER {
            if dirty.contains(&node) {
                for dep in node.dependents() {
                    if !dirty.contains(dep) {
                        dirty.push(*dep);
                    }
                }
            }
        }
        Node::ORDER
            .into_iter()
            .filter(|n| dirty.contains(n))
            .collect()
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TypeChanged(TypeTag),
    PokemonChosen(String),
}

impl Event {
    fn source(&self) -> Node {
        match self {
            Event::TypeChanged(_) => Node::TypeFilter,
            Event::PokemonChosen(_) => Node::Selector,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One session's UI state, independent of rendering.
pub struct AppState {
    /// Table loaded at start-up, shared by every session.
    pub dataset: Arc<Dataset>,

    /// Chosen primary type.
    pub selected_type: TypeTag,

    /// Dropdown derived from `selected_type`.
    pub selector: PokemonSelector,

    pub stats_chart: ProportionChart,

    pub distribution_chart: ProportionChart,

    /// Colours of the distribution slices, fixed per type.
    pub distribution_colors: ColorMap,

    /// Raw table dump, rendered once.
    pub table_text: String,
}

impl AppState {
    /// Build the initial state: `initial_type` selected, its first name chosen.
    pub fn new(dataset: Arc<Dataset>, initial_type: TypeTag) -> Self {
        let table_text = render_table(&dataset);
        let mut state = Self {
            dataset,
            selected_type: initial_type,
            selector: PokemonSelector::default(),
            stats_chart: ProportionChart::empty(),
            distribution_chart: ProportionChart::empty(),
            distribution_colors: ColorMap::default(),
            table_text,
        };
        state.recompute_from(Node::TypeFilter);
        state.distribution_colors = ColorMap::for_chart(&state.distribution_chart);
        state
    }

    /// Apply one interaction and synchronously refresh every dependent view.
    pub fn apply(&mut self, event: Event) {
        log::debug!("Applying {event:?}");
        let source = event.source();
        match event {
            Event::TypeChanged(tag) => self.selected_type = tag,
            Event::PokemonChosen(name) => {
                if !self.selector.choose(&name) {
                    log::warn!(
                        "'{name}' is not a {} Pokémon; keeping current selection",
                        self.selected_type
                    );
                    return;
                }
            }
        }
        self.recompute_from(source);
    }

    fn recompute_from(&mut self, source: Node) {
        for node in source.downstream() {
            log::debug!("Recomputing {node:?}");
            match node {
                // The input itself; nothing to derive.
                Node::TypeFilter => {}
                Node::Selector => {
                    if source != Node::Selector {
                        self.selector = PokemonSelector::for_type(&self.dataset, self.selected_type);
                    }
                }
                Node::Stats => {
                    self.stats_chart =
                        compute_stats(&self.dataset, self.selector.selected.as_deref());
                }
                Node::Distribution => {
                    self.distribution_chart = compute_distribution(&self.dataset);
                }
            }
        }
    }
}
