use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Mint an exact number of shares, pulling whatever assets they cost.
/// Shares-denominated mirror of deposit; the asset cost rounds up so the
/// vault is never under-collateralized.
#[derive(Accounts)]
pub struct MintShares<'info> {
    /// User paying in assets
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// Vault state PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.owner.as_ref(), &vault_state.index.to_le_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Asset mint
    #[account(address = vault_state.asset_mint)]
    pub asset_mint: Account<'info, Mint>,

    /// Share mint
    #[account(
        mut,
        address = vault_state.share_mint,
    )]
    pub share_mint: Account<'info, Mint>,

    /// Vault authority PDA
    /// CHECK: PDA used as mint authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.key().as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Depositor's asset token account (source)
    #[account(
        mut,
        constraint = depositor_asset_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = depositor_asset_account.owner == depositor.key() @ VaultError::InvalidOwner,
    )]
    pub depositor_asset_account: Account<'info, TokenAccount>,

    /// Receiver's share token account (destination)
    #[account(
        mut,
        constraint = receiver_share_account.mint == vault_state.share_mint @ VaultError::InvalidMint,
    )]
    pub receiver_share_account: Account<'info, TokenAccount>,

    /// Vault's custody token account
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<MintShares>, shares: u64) -> Result<()> {
    // CHECKS
    require!(!ctx.accounts.vault_state.paused, VaultError::EnforcedPause);
    require!(shares > 0, VaultError::ZeroMintAmount);

    let vault_key = ctx.accounts.vault_state.key();
    let vault_state = &mut ctx.accounts.vault_state;

    // Asset cost from pre-transfer totals, rounded up
    let assets = vault_state.preview_mint(shares)?;

    // EFFECTS: Update custody totals before external calls
    vault_state.credit(assets, shares)?;

    // INTERACTIONS

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor_asset_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, assets)?;

    let authority_bump = vault_state.authority_bump;
    let authority_seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        vault_key.as_ref(),
        &[authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    let mint_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        MintTo {
            mint: ctx.accounts.share_mint.to_account_info(),
            to: ctx.accounts.receiver_share_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::mint_to(mint_ctx, shares)?;

    emit!(Deposited {
        vault: vault_key,
        sender: ctx.accounts.depositor.key(),
        receiver: ctx.accounts.receiver_share_account.owner,
        assets,
        shares,
        total_assets: ctx.accounts.vault_state.total_assets,
        total_shares: ctx.accounts.vault_state.total_shares,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
