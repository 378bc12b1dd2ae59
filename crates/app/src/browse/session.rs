use std::sync::Arc;

use chrono::Utc;
use newsdesk_core::domain::filters::SearchState;
use newsdesk_core::domain::news::NewsEnvelope;
use newsdesk_core::orchestrator::{
    FetchTicket, NewsTransport, Notice, Orchestrator, RequestResult, RequestToken,
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub state: RequestResult,
    pub notice: Option<Notice>,
}

impl View {
    fn of(orchestrator: &Orchestrator) -> Self {
        Self {
            state: orchestrator.state().clone(),
            notice: orchestrator.notice(),
        }
    }
}

struct Completion<E> {
    token: RequestToken,
    outcome: Result<NewsEnvelope, E>,
}

pub async fn run<T>(
    transport: Arc<T>,
    mut searches: watch::Receiver<SearchState>,
    views: mpsc::Sender<View>,
) where
    T: NewsTransport + 'static,
{
    let mut orchestrator = Orchestrator::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion<T::Error>>();

    let initial = searches.borrow_and_update().clone();
    if !commit(&mut orchestrator, &initial, &transport, &done_tx, &views).await {
        return;
    }

    loop {
        tokio::select! {
            changed = searches.changed() => {
                if changed.is_err() {
                    break;
                }
                let search = searches.borrow_and_update().clone();
                if !commit(&mut orchestrator, &search, &transport, &done_tx, &views).await {
                    break;
                }
            }
            Some(done) = done_rx.recv() => {
                if let Err(err) = &done.outcome {
                    warn!(token = done.token.value(), error = %err, "news request failed");
                }
                let token = done.token;
                if !orchestrator.resolve(token, done.outcome) {
                    debug!(token = token.value(), "discarded superseded response");
                    continue;
                }
                if views.send(View::of(&orchestrator)).await.is_err() {
                    break;
                }
            }
        }
    }
}

async fn commit<T>(
    orchestrator: &mut Orchestrator,
    search: &SearchState,
    transport: &Arc<T>,
    done: &mpsc::UnboundedSender<Completion<T::Error>>,
    views: &mpsc::Sender<View>,
) -> bool
where
    T: NewsTransport + 'static,
{
    let before = View::of(orchestrator);
    if let Some(ticket) = orchestrator.commit(search, Utc::now()) {
        debug!(token = ticket.token.value(), params = ?ticket.params, "issuing news request");
        spawn_fetch(Arc::clone(transport), ticket, done.clone());
    }
    let after = View::of(orchestrator);
    if after == before {
        return true;
    }
    views.send(after).await.is_ok()
}

fn spawn_fetch<T>(
    transport: Arc<T>,
    ticket: FetchTicket,
    done: mpsc::UnboundedSender<Completion<T::Error>>,
) where
    T: NewsTransport + 'static,
{
    tokio::spawn(async move {
        let outcome = transport.search(&ticket.params).await;
        let _ = done.send(Completion {
            token: ticket.token,
            outcome,
        });
    });
}
