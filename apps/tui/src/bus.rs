//! Named-event publish/subscribe with synchronous, ordered delivery.
//!
//! Handlers receive the context mutably, so a handler's writes are visible to
//! every handler that runs after it in the same publish. A handler may publish
//! again through the bus it is handed; the nested publish runs to completion
//! before the outer one moves on to its next handler.

use crate::data::RowKey;
use crate::domain::Metric;
use crate::step::StepFrame;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventName {
    YearChanged,
    MapCountriesSelected,
    ScatterCountrySelected,
    CountrySearched,
    StepMinMaxComputed,
    SelectionChanged,
    StepRendered,
}

impl EventName {
    pub const ALL: [Self; 7] = [
        Self::YearChanged,
        Self::MapCountriesSelected,
        Self::ScatterCountrySelected,
        Self::CountrySearched,
        Self::StepMinMaxComputed,
        Self::SelectionChanged,
        Self::StepRendered,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YearChanged => "yearChanged",
            Self::MapCountriesSelected => "mapCountriesSelected",
            Self::ScatterCountrySelected => "scatterCountrySelected",
            Self::CountrySearched => "countrySearched",
            Self::StepMinMaxComputed => "stepMinMaxComputed",
            Self::SelectionChanged => "selectionChanged",
            Self::StepRendered => "stepRendered",
        }
    }

    /// Events a chart view may emit in response to a user gesture.
    pub const fn is_gesture(self) -> bool {
        matches!(
            self,
            Self::YearChanged
                | Self::MapCountriesSelected
                | Self::ScatterCountrySelected
                | Self::CountrySearched
                | Self::StepMinMaxComputed
        )
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    YearChanged { year: i32 },
    MapCountriesSelected(Vec<String>),
    ScatterCountrySelected(Vec<String>),
    CountrySearched(String),
    StepMinMaxComputed { metric: Metric, rows: Vec<RowKey> },
    SelectionChanged,
    StepRendered(StepFrame),
}

impl DashboardEvent {
    pub const fn name(&self) -> EventName {
        match self {
            Self::YearChanged { .. } => EventName::YearChanged,
            Self::MapCountriesSelected(_) => EventName::MapCountriesSelected,
            Self::ScatterCountrySelected(_) => EventName::ScatterCountrySelected,
            Self::CountrySearched(_) => EventName::CountrySearched,
            Self::StepMinMaxComputed { .. } => EventName::StepMinMaxComputed,
            Self::SelectionChanged => EventName::SelectionChanged,
            Self::StepRendered(_) => EventName::StepRendered,
        }
    }
}

pub type Handler<C> = Rc<dyn Fn(&mut C, &DashboardEvent, &EventBus<C>)>;

pub struct EventBus<C> {
    handlers: RefCell<BTreeMap<EventName, Vec<Handler<C>>>>,
    depth: Cell<usize>,
}

impl<C> EventBus<C> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(BTreeMap::new()),
            depth: Cell::new(0),
        }
    }

    pub fn register<F>(&self, name: EventName, handler: F)
    where
        F: Fn(&mut C, &DashboardEvent, &Self) + 'static,
    {
        self.handlers
            .borrow_mut()
            .entry(name)
            .or_default()
            .push(Rc::new(handler));
    }

    /// Delivers `event` to every handler registered for its name, in registration order.
    /// Publishing with no handlers is a no-op.
    pub fn publish(&self, ctx: &mut C, event: &DashboardEvent) {
        let name = event.name();
        // Snapshot so handlers may register or publish without holding the borrow.
        let handlers = self
            .handlers
            .borrow()
            .get(&name)
            .cloned()
            .unwrap_or_default();

        if handlers.is_empty() {
            tracing::trace!(event = %name, "no handlers");
            return;
        }

        let depth = self.depth.get();
        if name.is_gesture() {
            tracing::debug!(event = %name, depth, handlers = handlers.len(), "publish");
        } else {
            tracing::trace!(event = %name, depth, handlers = handlers.len(), "publish");
        }
        self.depth.set(depth + 1);
        for handler in &handlers {
            handler(ctx, event, self);
        }
        self.depth.set(depth);
    }

    pub fn handler_count(&self, name: EventName) -> usize {
        self.handlers.borrow().get(&name).map_or(0, Vec::len)
    }

    /// Nesting level of the publish currently running, 0 when idle.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for EventBus<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<_, _> = self
            .handlers
            .borrow()
            .iter()
            .map(|(name, handlers)| (name.as_str(), handlers.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("handlers", &counts)
            .field("depth", &self.depth.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Vec<String>;

    fn year(year: i32) -> DashboardEvent {
        DashboardEvent::YearChanged { year }
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let bus = EventBus::<Log>::new();
        bus.register(EventName::YearChanged, |log, _, _| log.push("first".into()));
        bus.register(EventName::YearChanged, |log, _, _| log.push("second".into()));
        bus.register(EventName::SelectionChanged, |log, _, _| log.push("other".into()));

        let mut log = Log::new();
        bus.publish(&mut log, &year(2015));
        assert_eq!(log, ["first", "second"]);
    }

    #[test]
    fn payload_arrives_unchanged() {
        let bus = EventBus::<Log>::new();
        bus.register(EventName::MapCountriesSelected, |log, event, _| {
            if let DashboardEvent::MapCountriesSelected(countries) = event {
                log.extend(countries.iter().cloned());
            }
        });

        let mut log = Log::new();
        let countries = vec!["Chad".to_string(), "Peru".to_string()];
        bus.publish(&mut log, &DashboardEvent::MapCountriesSelected(countries.clone()));
        assert_eq!(log, countries);
    }

    #[test]
    fn publish_without_handlers_is_a_no_op() {
        let bus = EventBus::<Log>::new();
        let mut log = Log::new();
        bus.publish(&mut log, &DashboardEvent::CountrySearched("Peru".into()));
        assert!(log.is_empty());
        assert_eq!(bus.handler_count(EventName::CountrySearched), 0);
    }

    #[test]
    fn nested_publish_is_depth_first() {
        let bus = EventBus::<Log>::new();
        bus.register(EventName::YearChanged, |log, _, bus| {
            log.push(format!("year:start@{}", bus.depth()));
            bus.publish(log, &DashboardEvent::SelectionChanged);
            log.push("year:end".into());
        });
        bus.register(EventName::YearChanged, |log, _, _| log.push("year:second".into()));
        bus.register(EventName::SelectionChanged, |log, _, bus| {
            log.push(format!("selection@{}", bus.depth()));
        });

        let mut log = Log::new();
        bus.publish(&mut log, &year(2013));
        assert_eq!(
            log,
            ["year:start@1", "selection@2", "year:end", "year:second"]
        );
        assert_eq!(bus.depth(), 0);
    }

    #[test]
    fn registering_during_publish_applies_to_the_next_publish() {
        let bus = EventBus::<Log>::new();
        bus.register(EventName::YearChanged, |log, _, bus| {
            log.push("outer".into());
            if bus.handler_count(EventName::YearChanged) == 1 {
                bus.register(EventName::YearChanged, |log, _, _| log.push("late".into()));
            }
        });

        let mut log = Log::new();
        bus.publish(&mut log, &year(2013));
        assert_eq!(log, ["outer"]);
        bus.publish(&mut log, &year(2013));
        assert_eq!(log, ["outer", "outer", "late"]);
    }

    #[test]
    fn gestures_are_the_public_five() {
        let gestures: Vec<&str> = EventName::ALL
            .into_iter()
            .filter(|name| name.is_gesture())
            .map(EventName::as_str)
            .collect();
        assert_eq!(gestures.len(), 5);
        assert!(!gestures.contains(&"selectionChanged"));
        assert!(!gestures.contains(&"stepRendered"));
    }
}
