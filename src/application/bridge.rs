//! Notification bridge use case
//!
//! Translates method calls from the application layer into a sound cue or
//! a local notification. Environmental failures (no audio device, no
//! permission, notification service down) are logged and swallowed; only
//! malformed calls and unknown methods are reported back.

use std::future::Future;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::channel::{MethodCall, MethodResponse};
use crate::domain::command::BridgeCommand;
use crate::domain::error::BridgeError;
use crate::domain::notification::{
    ChannelDescriptor, NotificationContent, NotificationRequest, Registration,
};

use super::ports::{MethodHandler, Notifier, PermissionState, SoundPlayer};

/// Platform-agnostic notification bridge
pub struct NotificationBridge<S, N>
where
    S: SoundPlayer + 'static,
    N: Notifier + 'static,
{
    sound: Arc<S>,
    notifier: Arc<N>,
    channel: ChannelDescriptor,
    permission: Arc<Mutex<PermissionState>>,
    /// Fire-and-forget work still running (sound playback, permission prompt)
    background: Mutex<JoinSet<()>>,
}

impl<S, N> NotificationBridge<S, N>
where
    S: SoundPlayer + 'static,
    N: Notifier + 'static,
{
    /// Create a bridge posting to the timer channel
    pub fn new(sound: S, notifier: N) -> Self {
        Self {
            sound: Arc::new(sound),
            notifier: Arc::new(notifier),
            channel: ChannelDescriptor::timer(),
            permission: Arc::new(Mutex::new(PermissionState::Unknown)),
            background: Mutex::new(JoinSet::new()),
        }
    }

    /// Use a different channel descriptor
    pub fn with_channel(mut self, channel: ChannelDescriptor) -> Self {
        self.channel = channel;
        self
    }

    pub fn channel(&self) -> &ChannelDescriptor {
        &self.channel
    }

    /// Last known notification permission
    pub fn permission(&self) -> PermissionState {
        *self.permission.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Prepare the notification subsystem.
    ///
    /// Registers the channel (if the platform needs one) and starts a
    /// permission request in the background. Safe to call repeatedly.
    pub async fn initialize(&self) -> Registration {
        let registration = self.register_channel().await;

        let notifier = Arc::clone(&self.notifier);
        let permission = Arc::clone(&self.permission);
        self.spawn_background(async move {
            ask_permission(&*notifier, &permission).await;
        });

        registration
    }

    /// Register the notification channel, at most once per channel id
    pub async fn register_channel(&self) -> Registration {
        if !self.notifier.requires_channel() {
            return Registration::NotRequired;
        }

        match self.notifier.register_channel(&self.channel).await {
            Ok(registration) => {
                debug!(
                    channel = %self.channel.id,
                    ?registration,
                    "Notification channel checked"
                );
                registration
            }
            Err(e) => {
                warn!(
                    channel = %self.channel.id,
                    error = %e,
                    "Failed to register notification channel"
                );
                Registration::Failed
            }
        }
    }

    /// Ask for notification permission and remember the answer
    pub async fn request_permission(&self) -> PermissionState {
        ask_permission(&*self.notifier, &self.permission).await
    }

    /// Play the default notification sound.
    ///
    /// Resolves as soon as playback is handed off; it never fails.
    pub async fn play_sound(&self) -> Result<(), BridgeError> {
        let sound = Arc::clone(&self.sound);
        self.spawn_background(async move {
            if let Err(e) = sound.play_default().await {
                warn!(error = %e, "Failed to play notification sound");
            }
        });
        Ok(())
    }

    /// Post a notification with the given text.
    ///
    /// Permission denial and delivery failures are logged only.
    pub async fn show_notification(&self, content: NotificationContent) -> Result<(), BridgeError> {
        if self.permission() == PermissionState::Denied {
            info!("Notification permission denied, not showing notification");
            return Ok(());
        }

        let request = NotificationRequest::timer(content, &self.channel);
        match self.notifier.post(&request).await {
            Ok(()) => debug!(id = %request.id, title = %request.title, "Notification posted"),
            Err(e) => warn!(id = %request.id, error = %e, "Error showing notification"),
        }
        Ok(())
    }

    /// Wait for fire-and-forget work to finish.
    ///
    /// Short-lived hosts call this before exiting so a sound cue is not cut
    /// off mid-playback.
    pub async fn flush(&self) {
        let mut pending = {
            let mut background = self.background.lock().unwrap_or_else(|e| e.into_inner());
            std::mem::take(&mut *background)
        };
        while let Some(result) = pending.join_next().await {
            if let Err(e) = result {
                warn!(error = %e, "Background task failed");
            }
        }
    }

    fn spawn_background<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut background = self.background.lock().unwrap_or_else(|e| e.into_inner());
        // Reap finished tasks so a long-running host does not accumulate them
        while background.try_join_next().is_some() {}
        background.spawn(task);
    }

    /// Route a method call to the matching operation
    pub async fn dispatch(&self, call: &MethodCall) -> Result<(), BridgeError> {
        let command = BridgeCommand::from_call(call)?;
        debug!(method = command.method(), "Dispatching bridge command");

        match command {
            BridgeCommand::PlaySound => self.play_sound().await,
            BridgeCommand::ShowNotification(content) => self.show_notification(content).await,
        }
    }

    /// Dispatch and wrap the outcome as a wire response
    pub async fn handle(&self, call: &MethodCall) -> MethodResponse {
        let result = self.dispatch(call).await;
        if let Err(ref e) = result {
            debug!(method = %call.method, error = %e, "Method call rejected");
        }
        MethodResponse::from(result)
    }
}

#[async_trait]
impl<S, N> MethodHandler for NotificationBridge<S, N>
where
    S: SoundPlayer + 'static,
    N: Notifier + 'static,
{
    async fn handle(&self, call: &MethodCall) -> MethodResponse {
        NotificationBridge::handle(self, call).await
    }
}

async fn ask_permission<N: Notifier + ?Sized>(
    notifier: &N,
    permission: &Mutex<PermissionState>,
) -> PermissionState {
    match notifier.request_permission().await {
        Ok(state) => {
            info!("Notification permission granted: {}", state.is_granted());
            *permission.lock().unwrap_or_else(|e| e.into_inner()) = state;
            state
        }
        Err(e) => {
            warn!(error = %e, "Notification permission request failed");
            *permission.lock().unwrap_or_else(|e| e.into_inner())
        }
    }
}
