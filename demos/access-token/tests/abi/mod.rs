#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract AccessToken {
        function initialize(string name, string symbol, address owner, bytes cfg1, bytes cfg2, bytes cfg3, uint256 param) external;
        function owner() external view returns (address owner);
        function configuration() external view returns (bytes cfg1, bytes cfg2, bytes cfg3);
        function initialized() external view returns (bool initialized);

        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256 allowance);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        function setAccess(address accessor) external;
        function canAccess(address granter, address candidate) external view returns (bool allowed);
        function accessorOf(address granter) external view returns (address accessor);

        function supportsInterface(bytes4 interface_id) external view returns (bool supportsInterface);

        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidSender(address sender);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
        error ERC20InvalidSpender(address spender);
        error ERC20InvalidApprover(address approver);

        error AccessRegistryUnauthorizedAccount(address granter, address account);
        error AccessRegistryInvalidGranter(address granter);
        error AccessRegistryInvalidAccessor(address accessor);

        error InvalidInitialization();
        error NotInitialized();
        error AccessTokenInvalidOwner(address owner);

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        #[derive(Debug, PartialEq)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
        #[derive(Debug, PartialEq)]
        event AccessSet(address indexed granter, address indexed previous_accessor, address indexed new_accessor);
        #[derive(Debug, PartialEq)]
        event Initialized(uint64 version);
    }
);
