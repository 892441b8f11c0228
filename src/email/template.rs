pub const VERIFICATION_EMAIL_FROM: &str = "onboarding@resend.dev";
pub const VERIFICATION_EMAIL_SUBJECT: &str = "Verify your NomadNest account";

/// Renders the NomadNest verification card. `user_name` and `token` are inserted as-is.
pub fn build_verification_email_html(user_name: &str, token: &str) -> String {
  format!(
    r#"
<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 30px; text-align: center;">
    <h1 style="color: white; margin: 0; font-size: 28px;">Welcome to NomadNest!</h1>
  </div>

  <div style="padding: 40px 30px; background: white;">
    <p style="font-size: 16px; color: #333; margin-bottom: 20px;">Hi {user_name},</p>

    <p style="font-size: 16px; color: #333; line-height: 1.6; margin-bottom: 30px;">
      Thank you for joining NomadNest! To complete your account setup and start connecting with nomads worldwide, please verify your email address.
    </p>

    <div style="text-align: center; margin: 40px 0;">
      <div style="background: #f8f9fa; border: 2px dashed #667eea; border-radius: 8px; padding: 20px; display: inline-block; font-size: 32px; font-weight: bold; color: #667eea; letter-spacing: 3px;">
        {token}
      </div>
    </div>

    <p style="font-size: 14px; color: #666; text-align: center; margin-bottom: 30px;">
      Enter this 6-digit code in the app to verify your account. Code expires in 10 minutes.
    </p>

    <div style="background: #f8f9fa; border-radius: 8px; padding: 20px; margin: 30px 0;">
      <h3 style="color: #333; margin-top: 0;">What's next?</h3>
      <ul style="color: #666; line-height: 1.6; padding-left: 20px;">
        <li>Complete your profile setup</li>
        <li>Connect with nomads in your city</li>
        <li>Discover amazing travel opportunities</li>
        <li>Join local meetups and events</li>
      </ul>
    </div>

    <p style="font-size: 14px; color: #999; margin-top: 40px;">
      If you did not create this account, you can safely ignore this email.
    </p>
  </div>

  <div style="background: #f8f9fa; padding: 20px 30px; text-align: center; color: #666; font-size: 12px;">
    <p>NomadNest - Connecting Digital Nomads Worldwide</p>
  </div>
</div>
"#
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_verification_email_html_greets_user() {
    let html = build_verification_email_html("New User", "123456");
    assert!(html.contains("Hi New User,"));
  }

  #[test]
  fn test_build_verification_email_html_shows_token_in_code_box() {
    let html = build_verification_email_html("Ana", "654321");

    let code_box = html.find("letter-spacing: 3px;").expect("code box style");
    let token = html.find("654321").expect("token");
    assert!(token > code_box);
    assert!(html.contains("Hi Ana,"));
  }

  #[test]
  fn test_build_verification_email_html_keeps_fixed_copy() {
    let html = build_verification_email_html("Ana", "000000");
    assert!(html.contains("Welcome to NomadNest!"));
    assert!(html.contains("Code expires in 10 minutes."));
    assert!(html.contains("What's next?"));
    assert!(html.contains("NomadNest - Connecting Digital Nomads Worldwide"));
  }
}
