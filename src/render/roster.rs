use super::*;
use crate::PLACEHOLDER_PHOTO;
use crate::catalog::*;

/// Staff cards in catalog order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Roster;

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for member in STAFF.iter() {
            write!(
                f,
                "<div class=\"admin-card\">\
                 <img class=\"admin-photo\" src=\"{photo}\" alt=\"{name}\" onerror=\"this.src='{fallback}'\">\
                 <div class=\"admin-name\">{name}</div>\
                 <div class=\"admin-role\">{role}</div>\
                 <div class=\"admin-meta\">IGN: {ign}</div>\
                 <div class=\"admin-meta\">Discord: {discord}</div>\
                 </div>",
                photo = escape_html(member.photo),
                name = escape_html(member.name),
                fallback = PLACEHOLDER_PHOTO,
                role = escape_html(member.role),
                ign = escape_html(member.ign),
                discord = escape_html(member.discord),
            )?;
        }
        Ok(())
    }
}
