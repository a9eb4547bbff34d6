//! End-to-end subscription tests for msgboard.
//!
//! These tests drive boards and users through the public API and check the
//! notifications captured by a recording sink.

use msgboard::{
    Board, Channel, Directory, MsgBoardError, NewBoard, Notification, Subscription, User, UserId,
};

/// Create the public board used in most scenarios.
fn public_board() -> Board {
    NewBoard::public("Public Board")
        .with_channels(&[Channel::Email, Channel::Sms])
        .build()
}

/// Register a user and return the ID.
fn register(directory: &mut Directory, name: &str, password: &str) -> UserId {
    directory.register(User::new(name, password))
}

#[test]
fn test_subscribe_post_unsubscribe() {
    let mut board = public_board();
    let mut directory = Directory::new();
    let doanh = register(&mut directory, "Doanh", "Admin");
    let mut sink: Vec<Notification> = Vec::new();

    let outcome = directory
        .user_mut(doanh)
        .unwrap()
        .subscribe(&mut board, Channel::Email);
    assert_eq!(outcome, Subscription::Subscribed);
    assert_eq!(board.subscribers(), &[doanh]);

    let count = board.post("Hello", &directory, &mut sink).unwrap();
    assert_eq!(count, 1);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].channel, Channel::Email);
    assert_eq!(sink[0].message, "Hello");

    directory
        .user_mut(doanh)
        .unwrap()
        .unsubscribe(&mut board)
        .unwrap();
    assert!(board.subscribers().is_empty());
    assert!(directory.user(doanh).unwrap().channel_for(board.id()).is_none());
}

#[test]
fn test_subscribe_unsubscribe_round_trip() {
    let mut board = public_board();
    let mut directory = Directory::new();
    let kim = register(&mut directory, "Kim", "Admin");
    let dan = register(&mut directory, "Dan", "admin");
    directory
        .user_mut(kim)
        .unwrap()
        .subscribe(&mut board, Channel::Sms);

    let subscribers_before = board.subscribers().to_vec();
    let boards_before: Vec<_> = directory.user(dan).unwrap().boards().collect();

    let user = directory.user_mut(dan).unwrap();
    user.subscribe(&mut board, Channel::Email);
    user.unsubscribe(&mut board).unwrap();

    assert_eq!(board.subscribers(), subscribers_before.as_slice());
    let boards_after: Vec<_> = directory.user(dan).unwrap().boards().collect();
    assert_eq!(boards_after, boards_before);
}

#[test]
fn test_update_changes_channel_for_next_post() {
    let mut board = public_board();
    let mut directory = Directory::new();
    let doanh = register(&mut directory, "Doanh", "Admin");
    let mut sink: Vec<Notification> = Vec::new();

    let user = directory.user_mut(doanh).unwrap();
    user.subscribe(&mut board, Channel::Email);
    assert_eq!(user.update(&board, Channel::Sms).unwrap(), Channel::Email);

    board.post("Third Post!!!", &directory, &mut sink).unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].channel, Channel::Sms);
    assert!(board.is_subscriber(doanh));
}

#[test]
fn test_update_only_touches_one_board() {
    let mut first = public_board();
    let mut second = public_board();
    let mut directory = Directory::new();
    let doanh = register(&mut directory, "Doanh", "Admin");

    let user = directory.user_mut(doanh).unwrap();
    user.subscribe(&mut first, Channel::Email);
    user.subscribe(&mut second, Channel::Email);
    user.update(&first, Channel::Sms).unwrap();

    assert_eq!(user.channel_for(first.id()), Some(Channel::Sms));
    assert_eq!(user.channel_for(second.id()), Some(Channel::Email));
}

#[test]
fn test_private_board_password_gate() {
    let mut board = NewBoard::private("Private Board", "Admin")
        .with_channels(&[Channel::Email, Channel::WhatsApp])
        .build();
    let mut directory = Directory::new();
    let kim = register(&mut directory, "Kim", "Admin");
    let dan = register(&mut directory, "Dan", "wrong");

    assert!(!board.authenticate(directory.user(dan).unwrap()));
    assert!(board.authenticate(directory.user(kim).unwrap()));

    let rejected = directory
        .user_mut(dan)
        .unwrap()
        .subscribe(&mut board, Channel::Email);
    assert_eq!(rejected, Subscription::AuthenticationFailed);
    assert_eq!(directory.user(dan).unwrap().boards().count(), 0);
    assert!(board.subscribers().is_empty());

    let admitted = directory
        .user_mut(kim)
        .unwrap()
        .subscribe(&mut board, Channel::WhatsApp);
    assert_eq!(admitted, Subscription::Subscribed);
    assert_eq!(board.subscribers(), &[kim]);
}

#[test]
fn test_rejected_subscription_records_nothing() {
    let mut board = public_board();
    let mut directory = Directory::new();
    let luong = register(&mut directory, "Luong", "Admin");

    let outcome = directory
        .user_mut(luong)
        .unwrap()
        .subscribe(&mut board, Channel::WhatsApp);

    assert_eq!(outcome, Subscription::ChannelUnavailable);
    assert!(!directory.user(luong).unwrap().is_subscribed(board.id()));
    assert!(!board.is_subscriber(luong));
}

#[test]
fn test_post_notifies_each_subscriber_with_own_channel() {
    let mut board = NewBoard::public("Public Board")
        .with_channels(&Channel::ALL)
        .build();
    let mut directory = Directory::new();
    let subscribers = [
        (register(&mut directory, "Doanh", "Admin"), Channel::Email),
        (register(&mut directory, "Dan", "admin"), Channel::Sms),
        (register(&mut directory, "Kim", "Admin"), Channel::WhatsApp),
    ];
    for (id, channel) in subscribers {
        directory
            .user_mut(id)
            .unwrap()
            .subscribe(&mut board, channel);
    }
    let mut sink: Vec<Notification> = Vec::new();

    let count = board.post("First Post!!!", &directory, &mut sink).unwrap();

    assert_eq!(count, 3);
    let delivered: Vec<(&str, Channel)> = sink
        .iter()
        .map(|n| (n.recipient.as_str(), n.channel))
        .collect();
    assert_eq!(
        delivered,
        vec![
            ("Doanh", Channel::Email),
            ("Dan", Channel::Sms),
            ("Kim", Channel::WhatsApp),
        ]
    );
}

#[test]
fn test_unsubscribe_never_subscribed_is_error() {
    let mut board = public_board();
    let mut directory = Directory::new();
    let dan = register(&mut directory, "Dan", "admin");

    let result = directory.user_mut(dan).unwrap().unsubscribe(&mut board);

    assert!(matches!(result, Err(MsgBoardError::NotSubscribed { .. })));
}
