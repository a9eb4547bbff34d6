//! Scripted walkthrough of boards, users and channels.

use tracing::info;

use crate::channel::{Channel, NotificationSink};
use crate::config::Config;
use crate::user::{Directory, User};
use crate::Result;

/// Name of the public board the walkthrough uses.
pub const PUBLIC_BOARD: &str = "Public Board";

/// Name of the private board the walkthrough uses.
pub const PRIVATE_BOARD: &str = "Private Board";

/// Run the walkthrough against the boards named in `config`.
///
/// Four users join the public board and then the private board, posting
/// between subscription changes. Rejected subscriptions (wrong password,
/// channel not offered) are part of the script.
pub fn run(config: &Config, sink: &mut dyn NotificationSink) -> Result<()> {
    let mut public_board = config.board(PUBLIC_BOARD)?.build();
    let mut private_board = config.board(PRIVATE_BOARD)?.build();

    let mut directory = Directory::new();
    let doanh = directory.register(User::new("Doanh", "Admin"));
    let dan = directory.register(User::new("Dan", "admin"));
    let kim = directory.register(User::new("Kim", "Admin"));
    let luong = directory.register(User::new("Luong", "Admin"));

    directory
        .user_mut(doanh)?
        .subscribe(&mut public_board, Channel::Email);
    directory
        .user_mut(dan)?
        .subscribe(&mut public_board, Channel::Sms);
    public_board.post("First Post!!!", &directory, sink)?;

    directory.user_mut(dan)?.unsubscribe(&mut public_board)?;
    public_board.post("Second Post!!!", &directory, sink)?;

    directory
        .user_mut(doanh)?
        .update(&public_board, Channel::Sms)?;
    public_board.post("Third Post!!!", &directory, sink)?;

    for (user, channel) in [
        (doanh, Channel::WhatsApp),
        (dan, Channel::Sms),
        (kim, Channel::Email),
        (luong, Channel::Sms),
    ] {
        let outcome = directory
            .user_mut(user)?
            .subscribe(&mut private_board, channel);
        info!("Subscription to {}: {:?}", private_board.name(), outcome);
    }
    private_board.post("Fourth Post!!!", &directory, sink)?;

    directory.user_mut(kim)?.unsubscribe(&mut private_board)?;
    private_board.post("Fifth Post!!!", &directory, sink)?;

    directory
        .user_mut(doanh)?
        .update(&private_board, Channel::Sms)?;
    private_board.post("Sixth Post!!!", &directory, sink)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Notification;
    use crate::MsgBoardError;

    #[test]
    fn test_run_default_config() {
        let mut sink: Vec<Notification> = Vec::new();

        run(&Config::default(), &mut sink).unwrap();

        let rendered: Vec<String> = sink.iter().map(Notification::render).collect();
        assert_eq!(
            rendered,
            vec![
                "[EMAIL] Doanh <- Public Board: First Post!!!",
                "[SMS] Dan <- Public Board: First Post!!!",
                "[EMAIL] Doanh <- Public Board: Second Post!!!",
                "[SMS] Doanh <- Public Board: Third Post!!!",
                "[WhatsApp] Doanh <- Private Board: Fourth Post!!!",
                "[EMAIL] Kim <- Private Board: Fourth Post!!!",
                "[WhatsApp] Doanh <- Private Board: Fifth Post!!!",
                "[SMS] Doanh <- Private Board: Sixth Post!!!",
            ]
        );
    }

    #[test]
    fn test_run_missing_board() {
        let mut config = Config::default();
        config.boards.retain(|b| b.name != PRIVATE_BOARD);
        let mut sink: Vec<Notification> = Vec::new();

        let result = run(&config, &mut sink);

        assert!(matches!(result, Err(MsgBoardError::NotFound(_))));
        assert!(sink.is_empty());
    }
}
