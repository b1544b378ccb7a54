use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Register a user profile; one-shot per wallet
#[derive(Accounts)]
pub struct RegisterUser<'info> {
    /// User registering a profile
    /// Security: Must be signer; the profile PDA is derived from their key
    #[account(mut)]
    pub user: Signer<'info>,

    /// User profile PDA
    /// Security: init_if_needed plus an explicit authority check rejects
    /// re-registration with a typed error instead of a raw account error
    #[account(
        init_if_needed,
        payer = user,
        space = USER_PROFILE_SIZE,
        seeds = [USER_SEED, user.key().as_ref()],
        bump
    )]
    pub user_profile: Account<'info, UserProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterUser>, username: String, bio: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let profile = &mut ctx.accounts.user_profile;

    // CHECKS + EFFECTS: Bounds and the one-shot guard live in state
    profile.register(ctx.accounts.user.key(), username.clone(), bio, now)?;
    profile.bump = ctx.bumps.user_profile;

    emit!(UserRegistered {
        user: profile.authority,
        username,
        timestamp: now,
    });

    Ok(())
}
