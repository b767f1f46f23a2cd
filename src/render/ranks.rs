use super::*;
use crate::catalog::*;

/// Flip cards for every rank, priced for the selected term.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RankGrid(pub Term);

impl RankGrid {
    fn price(&self, rank: &Rank) -> &'static str {
        match self.0 {
            Term::ThreeMonth => rank.price3,
            Term::Permanent => rank.permanent,
        }
    }
}

impl From<Term> for RankGrid {
    fn from(term: Term) -> Self {
        Self(term)
    }
}

impl std::fmt::Display for RankGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in RANKS.iter() {
            let name = escape_html(rank.name);
            write!(
                f,
                "<div class=\"rank-card\"><div class=\"rank-inner\">\
                 <div class=\"rank-face rank-front\">\
                 <div class=\"rank-title\">{name}</div>\
                 <div class=\"rank-price\">{price}</div>\
                 <div class=\"rank-ability\">Hover to flip for perks</div>\
                 </div>\
                 <div class=\"rank-face rank-back\">\
                 <div class=\"rank-title\">{name}</div>\
                 <div class=\"rank-ability\">{ability}</div>\
                 <div class=\"rank-actions\">\
                 <button class=\"btn btn-primary btn-glow buy-now\">Buy Now</button>\
                 <button class=\"btn secondary add-cart\">Add to Cart</button>\
                 </div></div></div></div>",
                name = name,
                price = escape_html(self.price(rank)),
                ability = escape_html(rank.ability),
            )?;
        }
        Ok(())
    }
}
