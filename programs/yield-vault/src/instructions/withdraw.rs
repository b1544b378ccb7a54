use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Withdraw an exact amount of assets, burning whatever shares they cost.
///
/// The caller may spend another holder's shares if that holder has made
/// them the SPL delegate of their share account with a sufficient
/// delegated amount; the token program decrements the delegation on burn.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Transaction sender; share owner or approved delegate
    pub caller: Signer<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.owner.as_ref(), &vault_state.index.to_le_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Share mint
    #[account(
        mut,
        address = vault_state.share_mint,
    )]
    pub share_mint: Account<'info, Mint>,

    /// Vault authority PDA
    /// CHECK: PDA used as transfer authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.key().as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Share account the burn is drawn from; its owner is the "owner"
    /// of the withdrawal
    #[account(
        mut,
        constraint = owner_share_account.mint == vault_state.share_mint @ VaultError::InvalidMint,
    )]
    pub owner_share_account: Account<'info, TokenAccount>,

    /// Asset token account receiving the withdrawal; may belong to anyone
    #[account(
        mut,
        constraint = receiver_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
    )]
    pub receiver_asset_account: Account<'info, TokenAccount>,

    /// Vault's custody token account
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    // CHECKS
    require!(!ctx.accounts.vault_state.paused, VaultError::EnforcedPause);
    require!(amount > 0, VaultError::ZeroWithdrawAmount);

    let vault_key = ctx.accounts.vault_state.key();
    let vault_state = &mut ctx.accounts.vault_state;

    // Shares to burn, rounded up so redemption never over-pays
    let shares = vault_state.preview_withdraw(amount)?;

    let share_account = &ctx.accounts.owner_share_account;
    require!(share_account.amount >= shares, VaultError::InsufficientShares);

    // Delegated withdrawal: the caller must hold a sufficient allowance
    verify_share_spender(
        &share_account.owner,
        share_account.delegate.into(),
        share_account.delegated_amount,
        &ctx.accounts.caller.key(),
        shares,
    )?;

    // EFFECTS: Update custody totals before external calls
    vault_state.debit(amount, shares)?;

    // INTERACTIONS

    // Burn shares from the owner (token program enforces the delegation)
    let burn_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Burn {
            mint: ctx.accounts.share_mint.to_account_info(),
            from: ctx.accounts.owner_share_account.to_account_info(),
            authority: ctx.accounts.caller.to_account_info(),
        },
    );
    token::burn(burn_ctx, shares)?;

    // Push assets to the receiver
    let authority_bump = ctx.accounts.vault_state.authority_bump;
    let authority_seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        vault_key.as_ref(),
        &[authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault_token_account.to_account_info(),
            to: ctx.accounts.receiver_asset_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    emit!(Withdrawn {
        vault: vault_key,
        sender: ctx.accounts.caller.key(),
        receiver: ctx.accounts.receiver_asset_account.owner,
        owner: ctx.accounts.owner_share_account.owner,
        assets: amount,
        shares,
        total_assets: ctx.accounts.vault_state.total_assets,
        total_shares: ctx.accounts.vault_state.total_shares,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
