//! Fluent builder for constructing a [`DeliverySession`].

use dc_core::{DeliveryType, OrderId, SimClock};
use dc_mobility::{NavConfig, Navigator, ProgressTimer, TimerConfig};
use dc_schedule::Scheduler;
use dc_spatial::{ResortLayout, RouteKind, Router, WaypointRouter};

use crate::{CompletionHook, DeliverySession, SessionResult, Simulator};

/// Fluent builder for [`DeliverySession`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                      |
/// |---------------------|----------------------------------------------|
/// | `.delivery_type(t)` | inferred from the destination's route kind   |
/// | `.nav_config(c)`    | `NavConfig::default()`                       |
/// | `.timer_config(c)`  | `TimerConfig::default()`                     |
/// | `.layout(l)`        | `ResortLayout::resort_default()`             |
/// | `.router(r)`        | `WaypointRouter`                             |
/// | `.on_complete(f)`   | none                                         |
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionBuilder::new(OrderId(7), "Room #215")
///     .delivery_type(DeliveryType::Room)
///     .on_complete(|order| tracing::info!(%order, "handed over"))
///     .build()?;
/// ```
pub struct SessionBuilder<R: Router = WaypointRouter> {
    order:         OrderId,
    destination:   String,
    delivery_type: Option<DeliveryType>,
    nav_config:    NavConfig,
    timer_config:  TimerConfig,
    layout:        Option<ResortLayout>,
    router:        R,
    on_complete:   Option<CompletionHook>,
}

impl SessionBuilder<WaypointRouter> {
    /// Create a builder for `order` going to the free-text `destination`.
    pub fn new(order: OrderId, destination: impl Into<String>) -> Self {
        Self {
            order,
            destination:   destination.into(),
            delivery_type: None,
            nav_config:    NavConfig::default(),
            timer_config:  TimerConfig::default(),
            layout:        None,
            router:        WaypointRouter,
            on_complete:   None,
        }
    }
}

impl<R: Router> SessionBuilder<R> {
    /// Set the host's delivery-type discriminator.
    pub fn delivery_type(mut self, delivery_type: DeliveryType) -> Self {
        self.delivery_type = Some(delivery_type);
        self
    }

    pub fn nav_config(mut self, config: NavConfig) -> Self {
        self.nav_config = config;
        self
    }

    pub fn timer_config(mut self, config: TimerConfig) -> Self {
        self.timer_config = config;
        self
    }

    pub fn layout(mut self, layout: ResortLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Swap the route selector.
    pub fn router<R2: Router>(self, router: R2) -> SessionBuilder<R2> {
        SessionBuilder {
            order:         self.order,
            destination:   self.destination,
            delivery_type: self.delivery_type,
            nav_config:    self.nav_config,
            timer_config:  self.timer_config,
            layout:        self.layout,
            router,
            on_complete:   self.on_complete,
        }
    }

    /// Register the callback fired once per completed run.
    pub fn on_complete<F>(mut self, hook: F) -> Self
    where
        F: FnMut(OrderId) + Send + 'static,
    {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Validate configs, mount the simulator, and return an idle session.
    pub fn build(self) -> SessionResult<DeliverySession> {
        let layout = self.layout.unwrap_or_else(ResortLayout::resort_default);
        let delivery_type = self
            .delivery_type
            .unwrap_or_else(|| infer_delivery_type(&self.destination));

        let simulator = if delivery_type.uses_progress_timer() {
            Simulator::Timer(ProgressTimer::new(self.timer_config)?)
        } else {
            let route = self.router.route(&layout, &self.destination);
            let locations = layout.session_locations(&route, &self.destination);
            Simulator::Navigation {
                navigator: Navigator::new(route, self.nav_config)?,
                locations,
            }
        };

        tracing::debug!(
            order = %self.order,
            destination = %self.destination,
            %delivery_type,
            "session built"
        );

        Ok(DeliverySession {
            order:         self.order,
            destination:   self.destination,
            delivery_type,
            layout,
            simulator,
            clock:         SimClock::new(),
            scheduler:     Scheduler::new(),
            task:          None,
            on_complete:   self.on_complete,
            completed:     false,
            disposed:      false,
        })
    }
}

/// Delivery type implied by a destination string when the host gives none.
pub fn infer_delivery_type(destination: &str) -> DeliveryType {
    match RouteKind::classify(destination) {
        RouteKind::Room    => DeliveryType::Room,
        RouteKind::Pool    => DeliveryType::Pool,
        RouteKind::Beach   => DeliveryType::Beach,
        RouteKind::Generic => DeliveryType::Standard,
    }
}
