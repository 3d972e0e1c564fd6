pub const WELCOME_SUBJECT: &str = "Bienvenue sur HackDesk";
pub const PASSWORD_CHANGED_SUBJECT: &str = "Réinitialisation de votre mot de passe";

pub fn render_welcome(firstname: &str, lastname: &str, base_url: &str) -> String {
    let firstname = escape(firstname);
    let lastname = escape(lastname);
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Bienvenue sur HackDesk</h2>
    <p>Bonjour {firstname} {lastname},</p>
    <p>Votre compte a bien été créé. Vous pouvez dès maintenant gérer vos clients, projets et tâches.</p>
    <p><a href="{base_url}" style="display: inline-block; padding: 10px 20px; background: #0070f3; color: white; text-decoration: none; border-radius: 4px;">Se connecter</a></p>
    <p style="color: #666; font-size: 14px;">Si vous n'êtes pas à l'origine de cette inscription, vous pouvez ignorer cet email.</p>
</body>
</html>"#
    )
}

pub fn render_password_changed(firstname: &str, lastname: &str) -> String {
    let firstname = escape(firstname);
    let lastname = escape(lastname);
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Mot de passe modifié</h2>
    <p>Bonjour {firstname} {lastname},</p>
    <p>Le mot de passe de votre compte HackDesk vient d'être réinitialisé.</p>
    <p style="color: #666; font-size: 14px;">Si vous n'êtes pas à l'origine de ce changement, réinitialisez votre mot de passe immédiatement.</p>
</body>
</html>"#
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
