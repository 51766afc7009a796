// skyportal/src/portal/handle.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::PortalConfig;
use crate::constants::CMD_COLOR;
use crate::protocol::{Command, Response};
use crate::slot::SlotStore;
use crate::storage::Library;
use crate::transport::Transport;
use crate::types::{LedColor, PortalState};
use crate::{Error, Result};

/// Result of dispatching one frame, as seen on the wire.
#[derive(Debug)]
pub enum Outcome {
    /// Send these bytes back to the host
    Respond(Response),
    /// Nothing goes back
    NoResponse,
    /// The frame was rejected; nothing goes back and nothing changed
    ProtocolError(Error),
}

impl Outcome {
    /// Bytes to put on the transport, if any.
    pub fn response_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Outcome::Respond(resp) => Some(resp.encode()),
            _ => None,
        }
    }
}

impl From<Result<Option<Response>>> for Outcome {
    fn from(res: Result<Option<Response>>) -> Self {
        match res {
            Ok(Some(resp)) => Outcome::Respond(resp),
            Ok(None) => Outcome::NoResponse,
            Err(e) => Outcome::ProtocolError(e),
        }
    }
}

/// Protocol engine context. One value per emulation session; the slot
/// store is shared with whatever manages images.
pub struct Portal {
    state: PortalState,
    led_color: LedColor,
    auto_sense: bool,
    slots: Arc<SlotStore>,
    config: PortalConfig,
}

impl Portal {
    /// Idle portal over `slots`.
    pub fn new(slots: Arc<SlotStore>, config: PortalConfig) -> Self {
        Self {
            state: PortalState::Idle,
            led_color: LedColor::default(),
            auto_sense: config.auto_sense,
            slots,
            config,
        }
    }

    /// Current session state.
    pub fn state(&self) -> PortalState {
        self.state
    }

    /// Last color set by the host.
    pub fn led_color(&self) -> LedColor {
        self.led_color
    }

    /// Carried for interface compatibility; no behavior depends on it.
    pub fn auto_sense(&self) -> bool {
        self.auto_sense
    }

    /// Toggle auto-sense.
    pub fn set_auto_sense(&mut self, enabled: bool) {
        self.auto_sense = enabled;
    }

    /// Shared slot store.
    pub fn slots(&self) -> &Arc<SlotStore> {
        &self.slots
    }

    /// Active configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Slot occupancy bitmask
    pub fn status(&self) -> u16 {
        self.slots.status()
    }

    /// Enter `Activated`.
    pub fn activate(&mut self) {
        self.state = PortalState::Activated;
        log::info!("portal activated");
    }

    /// Return to `Idle`.
    pub fn deactivate(&mut self) {
        self.state = PortalState::Idle;
        log::info!("portal deactivated");
    }

    /// Record the LED color.
    pub fn set_color(&mut self, color: LedColor) {
        self.led_color = color;
        log::info!("led color set to {}", color);
    }

    /// Decode and execute one frame.
    ///
    /// `Ok(Some(_))` carries the response to send, `Ok(None)` means the
    /// command is answered with silence, and `Err(_)` means the frame was
    /// rejected without touching any state.
    pub fn process(&mut self, frame: &[u8]) -> Result<Option<Response>> {
        #[cfg(feature = "diagnostics")]
        log::trace!("rx {}", crate::utils::bytes_to_hex_spaced(frame));

        let cmd = match Command::decode(frame) {
            Ok(cmd) => cmd,
            // A short color frame is ignored rather than rejected.
            Err(e) if frame.first() == Some(&CMD_COLOR) => {
                log::debug!("ignoring short color frame: {}", e);
                return Ok(None);
            }
            Err(e) => {
                log::debug!("rejected frame: {}", e);
                return Err(e);
            }
        };
        self.execute(cmd)
    }

    /// Tri-state view of [`Portal::process`].
    pub fn dispatch(&mut self, frame: &[u8]) -> Outcome {
        self.process(frame).into()
    }

    /// Execute an already decoded command.
    pub fn execute(&mut self, cmd: Command) -> Result<Option<Response>> {
        match cmd {
            Command::Activate => {
                self.activate();
                Ok(Some(Response::Ready))
            }
            Command::Deactivate => {
                self.deactivate();
                Ok(None)
            }
            Command::SetColor { color, .. } => {
                self.set_color(color);
                Ok(None)
            }
            Command::Status => Ok(Some(Response::Status {
                mask: self.status(),
            })),
            Command::ReadBlock { slot, block } => {
                let data = self
                    .slots
                    .read_block(slot as usize, block as usize)
                    .inspect_err(|e| log::debug!("read {}/{} failed: {}", slot, block, e))?;
                Ok(Some(Response::ReadBlock { slot, block, data }))
            }
            Command::WriteBlock { slot, block, data } => {
                self.slots
                    .write_block(slot as usize, block as usize, &data)
                    .inspect_err(|e| log::debug!("write {}/{} failed: {}", slot, block, e))?;
                Ok(Some(Response::WriteBlock { slot, block }))
            }
            Command::ReadyQuery => Ok(self.state.answers_ready().then_some(Response::Ready)),
            Command::Unknown { opcode } => {
                log::warn!("unknown command: {:#04x}", opcode);
                Ok(None)
            }
        }
    }

    /// Pull one frame from `transport`, dispatch it and send any response.
    ///
    /// Transport failures (including `Timeout`) are returned as errors;
    /// protocol failures come back inside the `Outcome`.
    pub fn serve_once(&mut self, transport: &mut dyn Transport) -> Result<Outcome> {
        let mut frame = transport.receive(self.config.receive_timeout_ms)?;
        if frame.len() > self.config.frame_size {
            log::warn!(
                "frame of {} bytes exceeds frame size {}; truncating",
                frame.len(),
                self.config.frame_size
            );
            frame.truncate(self.config.frame_size);
        }

        let outcome = self.dispatch(&frame);
        if let Some(bytes) = outcome.response_bytes() {
            #[cfg(feature = "diagnostics")]
            log::trace!("tx {}", crate::utils::bytes_to_hex_spaced(&bytes));
            transport.send(&bytes)?;
        }
        Ok(outcome)
    }

    /// Serve frames until `running` is cleared or the transport closes.
    ///
    /// Timeouts and rejected frames never stop the loop.
    pub fn serve(&mut self, transport: &mut dyn Transport, running: &AtomicBool) -> Result<()> {
        log::info!("portal serve loop started");
        while running.load(Ordering::Relaxed) {
            match self.serve_once(transport) {
                Ok(_) | Err(Error::Timeout) => {}
                Err(Error::TransportClosed) => {
                    log::info!("transport closed");
                    break;
                }
                Err(e) => {
                    log::warn!("transport error: {}", e);
                    transport.reset()?;
                }
            }
        }
        log::info!("portal serve loop stopped");
        Ok(())
    }

    /// End the session: optionally save every loaded image, unload the
    /// slots that are safe to drop and return to `Idle`.
    ///
    /// A slot whose save fails stays loaded and the error is returned, so
    /// the caller can retry.
    pub fn shutdown(&mut self, library: &Library) -> Result<()> {
        let released = library.release_all(self.config.save_on_shutdown);
        self.deactivate();
        released.map(|n| log::info!("shutdown released {} slot(s)", n))
    }
}
