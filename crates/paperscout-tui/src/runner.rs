use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use paperscout_core::{Command, ExportPayload, GatewayEvent, RemoteGateway};

/// Run one controller command against the gateway on its own task, sending
/// the completion back over the event channel.
///
/// Each command gets its own task so a slow export download never blocks
/// expansion, search or the UI. Ordering is not this layer's problem: every
/// completion carries the sequence number of its request, and the controller
/// drops any that have been superseded.
pub fn dispatch(
    command: Command,
    gateway: Arc<RemoteGateway>,
    tx: mpsc::UnboundedSender<GatewayEvent>,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        let work = async {
            match command {
                Command::Expand { query, seq } => GatewayEvent::Expanded {
                    seq,
                    result: gateway.expand(&query).await,
                },
                Command::Search {
                    topic,
                    max_results,
                    seq,
                } => GatewayEvent::Searched {
                    seq,
                    result: gateway.search(&topic, max_results).await,
                },
                Command::Download { plan, seq } => {
                    let result = gateway.download(&plan.paper_ids).await.map(|bytes| {
                        ExportPayload {
                            bytes,
                            file_name: plan.file_name,
                        }
                    });
                    GatewayEvent::Downloaded { seq, result }
                }
            }
        };

        tokio::select! {
            _ = cancel.cancelled() => {}
            event = work => {
                let _ = tx.send(event);
            }
        }
    });
}
