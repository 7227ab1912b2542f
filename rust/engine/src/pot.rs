use crate::player::Bot;

/// Settles every wager at the end of a game and returns the pot paid out.
///
/// With a winner, each other bot loses its own bet and the winner collects the
/// sum of those bets; busted and standing losers are treated the same. Without
/// a winner no balance moves. Either way every bet is cleared afterwards.
pub fn settle(bots: &mut [Bot], winner: Option<usize>) -> i64 {
    let mut pot = 0;
    if let Some(w) = winner {
        for (idx, bot) in bots.iter_mut().enumerate() {
            if idx != w {
                pot += bot.debit_bet();
            }
        }
        if let Some(bot) = bots.get_mut(w) {
            bot.credit(pot);
        }
    }
    for bot in bots.iter_mut() {
        bot.clear_bet();
    }
    pot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_takes_other_bets() {
        let mut bots = vec![
            Bot::new("a", 100).unwrap(),
            Bot::new("b", 250).unwrap(),
            Bot::new("c", 50).unwrap(),
        ];
        let pot = settle(&mut bots, Some(1));
        assert_eq!(pot, 150);
        let balances: Vec<i64> = bots.iter().map(|b| b.balance()).collect();
        assert_eq!(balances, vec![900, 1150, 950]);
        assert!(bots.iter().all(|b| b.current_bet() == 0));
    }

    #[test]
    fn no_winner_keeps_balances() {
        let mut bots = vec![Bot::new("a", 100).unwrap(), Bot::new("b", 200).unwrap()];
        assert_eq!(settle(&mut bots, None), 0);
        assert!(bots.iter().all(|b| b.balance() == 1000));
        assert!(bots.iter().all(|b| b.current_bet() == 0));
    }
}
