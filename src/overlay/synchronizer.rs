// ============================================================================
// OVERLAY SYNCHRONIZER - Mantiene las capas fijas enlazadas al mapa anfitrión
// ============================================================================
// Dos disparadores (mapa listo, cambio de viewport) convergen en `apply`.
// No hay vuelta a Unattached; el desmontaje es cosa de la página.
// ============================================================================

use std::rc::Rc;

use super::traits::{HostMap, LayerOverlay, OverlayError};
use crate::layers::LayerSet;
use crate::models::Viewport;

pub enum SyncState<H> {
    Unattached,
    Attached(H),
}

pub struct OverlaySynchronizer<O: LayerOverlay> {
    layers: Rc<LayerSet>,
    overlay: O,
    viewport: Viewport,
    state: SyncState<O::Host>,
}

impl<O: LayerOverlay> OverlaySynchronizer<O> {
    pub fn new(layers: Rc<LayerSet>, overlay: O, viewport: Viewport) -> Self {
        Self {
            layers,
            overlay,
            viewport,
            state: SyncState::Unattached,
        }
    }

    pub fn layers(&self) -> &Rc<LayerSet> {
        &self.layers
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, SyncState::Attached(_))
    }

    /// Unattached -> Attached y luego empuja el viewport actual. Solo una vez:
    /// una segunda señal de listo se rechaza y se conserva el primer mapa.
    pub fn host_ready(&mut self, host: O::Host) -> Result<(), OverlayError> {
        if self.is_attached() {
            log::warn!("⚠️ El mapa anfitrión avisó dos veces que está listo, ignorando");
            return Err(OverlayError::AlreadyAttached);
        }
        log::info!("🗺️ Mapa anfitrión listo, enlazando overlay {:?}", self.layers.ids());
        self.state = SyncState::Attached(host);
        self.apply()
    }

    /// Guarda el viewport deseado y lo empuja si ya hay mapa. Un viewport
    /// igual al actual no se vuelve a empujar.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), OverlayError> {
        if viewport == self.viewport {
            return Ok(());
        }
        self.viewport = viewport;
        if !self.is_attached() {
            log::info!("🕓 Viewport guardado, el mapa anfitrión aún no está listo");
            return Ok(());
        }
        self.apply()
    }

    fn apply(&self) -> Result<(), OverlayError> {
        let SyncState::Attached(host) = &self.state else {
            return Ok(());
        };
        let Viewport { center, zoom } = self.viewport;
        log::info!("🎯 Centrando mapa en ({}, {}) con zoom {}", center.lat, center.lng, zoom);

        host.set_center(center)?;
        host.set_zoom(zoom)?;
        self.overlay.attach(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::LatLng;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Center(LatLng),
        Zoom(f64),
        Attach,
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct FakeHost {
        log: Log,
        fail_zoom: bool,
    }

    impl HostMap for FakeHost {
        fn set_center(&self, center: LatLng) -> Result<(), OverlayError> {
            self.log.borrow_mut().push(Call::Center(center));
            Ok(())
        }

        fn set_zoom(&self, zoom: f64) -> Result<(), OverlayError> {
            if self.fail_zoom {
                return Err(OverlayError::host_call("setZoom", "boom"));
            }
            self.log.borrow_mut().push(Call::Zoom(zoom));
            Ok(())
        }
    }

    struct FakeOverlay {
        log: Log,
    }

    impl LayerOverlay for FakeOverlay {
        type Host = FakeHost;

        fn attach(&self, _host: &FakeHost) -> Result<(), OverlayError> {
            self.log.borrow_mut().push(Call::Attach);
            Ok(())
        }
    }

    fn setup() -> (OverlaySynchronizer<FakeOverlay>, Log) {
        let log: Log = Rc::default();
        let layers = Rc::new(LayerSet::from_config(&AppConfig::default()));
        let sync = OverlaySynchronizer::new(
            layers,
            FakeOverlay { log: log.clone() },
            Viewport::default(),
        );
        (sync, log)
    }

    fn host(log: &Log) -> FakeHost {
        FakeHost {
            log: log.clone(),
            fail_zoom: false,
        }
    }

    fn count(log: &Log, pred: impl Fn(&Call) -> bool) -> usize {
        log.borrow().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn nothing_happens_before_host_is_ready() {
        let (mut sync, log) = setup();

        sync.set_viewport(Viewport::new(LatLng::new(40.0, -75.0), 5.0)).unwrap();

        assert!(!sync.is_attached());
        assert!(log.borrow().is_empty());
        assert_eq!(sync.viewport().zoom, 5.0);
    }

    #[test]
    fn ready_pushes_initial_viewport_and_attaches_exactly_once() {
        let (mut sync, log) = setup();

        sync.host_ready(host(&log)).unwrap();
        sync.set_viewport(Viewport::default()).unwrap();

        let initial = Viewport::default();
        assert_eq!(
            *log.borrow(),
            vec![Call::Center(initial.center), Call::Zoom(initial.zoom), Call::Attach]
        );
    }

    #[test]
    fn viewport_recorded_before_ready_is_the_one_pushed() {
        let (mut sync, log) = setup();
        let wanted = Viewport::new(LatLng::new(39.29, -76.61), 11.0);

        sync.set_viewport(wanted).unwrap();
        sync.host_ready(host(&log)).unwrap();

        assert_eq!(log.borrow()[0], Call::Center(wanted.center));
        assert_eq!(log.borrow()[1], Call::Zoom(11.0));
    }

    #[test]
    fn every_change_is_pushed_and_layers_stay_the_same() {
        let (mut sync, log) = setup();
        let layers = Rc::clone(sync.layers());
        sync.host_ready(host(&log)).unwrap();

        for zoom in [9.0, 10.0, 12.0] {
            sync.set_viewport(Viewport::new(LatLng::new(38.0, -77.0), zoom)).unwrap();
            assert!(Rc::ptr_eq(&layers, sync.layers()));
        }

        assert_eq!(count(&log, |c| matches!(c, Call::Zoom(_))), 4);
        assert_eq!(count(&log, |c| matches!(c, Call::Center(_))), 4);
        assert_eq!(count(&log, |c| *c == Call::Attach), 4);
        assert_eq!(log.borrow().last(), Some(&Call::Attach));
    }

    #[test]
    fn second_ready_signal_is_rejected() {
        let (mut sync, log) = setup();
        sync.host_ready(host(&log)).unwrap();

        assert_eq!(sync.host_ready(host(&log)), Err(OverlayError::AlreadyAttached));
        assert_eq!(count(&log, |c| *c == Call::Attach), 1);
    }

    #[test]
    fn host_failure_stops_the_push_without_detaching() {
        let (mut sync, log) = setup();
        let failing = FakeHost {
            log: log.clone(),
            fail_zoom: true,
        };

        let err = sync.host_ready(failing).unwrap_err();

        assert!(matches!(err, OverlayError::HostCall { operation: "setZoom", .. }));
        assert!(sync.is_attached());
        assert_eq!(count(&log, |c| *c == Call::Attach), 0);
    }
}
