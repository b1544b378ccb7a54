use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, state::*};

/// Configure (or replace) the price feed for an asset mint
#[derive(Accounts)]
pub struct SetAssetPriceFeed<'info> {
    /// Acting admin
    /// Security: Membership checked against registry state in the handler
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Registry PDA
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Asset the feed belongs to
    pub asset_mint: Account<'info, Mint>,

    /// Per-asset feed entry PDA, created on first configuration
    #[account(
        init_if_needed,
        payer = admin,
        space = PRICE_FEED_ENTRY_SIZE,
        seeds = [PRICE_FEED_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub price_feed_entry: Account<'info, PriceFeedEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetAssetPriceFeed>, feed: Pubkey) -> Result<()> {
    // CHECKS: Admin gate and feed validity
    require!(
        ctx.accounts.registry.is_admin(&ctx.accounts.admin.key()),
        VaultError::NotAdmin
    );
    require!(feed != Pubkey::default(), VaultError::ZeroAddress);

    // EFFECTS: Overwrite-safe entry write
    let entry = &mut ctx.accounts.price_feed_entry;
    entry.asset = ctx.accounts.asset_mint.key();
    entry.feed = feed;
    entry.bump = ctx.bumps.price_feed_entry;

    emit!(PriceFeedSet {
        asset: entry.asset,
        feed,
        admin: ctx.accounts.admin.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
