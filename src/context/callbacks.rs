/*!
General callbacks associated with a context.

# Callback types

Callbacks are shared with each branch of a [parallel](crate::procedures::parallel) search, and so are [Send] and [Sync].
Information passed from the solver is non-mutable.
*/

use std::sync::Arc;

use crate::dispatch::Dispatcher;

use super::GenericContext;

/// A callback checked at each unit of work, which concludes the solve on returning `true`.
pub type CallbackTerminate = dyn Fn() -> bool + Send + Sync;

impl<R: rand::Rng> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Arc<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn set_dispatcher(&mut self, dispatcher: Arc<Dispatcher>) {
        self.dispatcher = Some(dispatcher);
    }
}
