//! ABI fragments for the deployed contracts.
//!
//! Only the functions and events this client uses are declared.

use alloy::sol;

sol! {
    /// Manga chapter NFT collection.
    interface IMangaNft {
        function freeMint(address to, uint256 tokenId) external;

        /// `maxCopies` must be a multiple of 5; the contract reverts otherwise.
        function createChapter(
            string mangaTitleZh,
            string mangaTitleEn,
            string mangaTitleJp,
            string descriptionZh,
            string descriptionEn,
            string descriptionJp,
            uint256 maxCopies,
            string uri_
        ) external returns (uint256);

        #[derive(Debug)]
        event ChapterCreated(
            uint256 indexed tokenId,
            address indexed creator,
            string mangaTitleZh,
            string mangaTitleEn,
            string mangaTitleJp
        );

        #[derive(Debug)]
        event ChapterMinted(uint256 indexed tokenId, address indexed to, uint256 mintTime);
    }
}

sol! {
    /// Monthly creator and reader statistics.
    interface IMonthlyReport {
        #[derive(Debug, Default, PartialEq, Eq)]
        struct CreatorData {
            uint256 totalNFTPublished;
            uint256 totalNFTShared;
            uint256 totalNFTValue;
            uint256 totalTransactions;
        }

        #[derive(Debug, Default, PartialEq, Eq)]
        struct ReaderData {
            uint256 tokensChargedThisMonth;
            uint256 currentBalance;
        }

        function uploadCreatorData(uint256 monthId, address user, CreatorData data) external;
        function uploadReaderData(uint256 monthId, address user, ReaderData data) external;

        function batchUploadCreatorData(uint256 monthId, address[] users, CreatorData[] data) external;
        function batchUploadReaderData(uint256 monthId, address[] users, ReaderData[] data) external;

        function getCreatorData(uint256 monthId, address user) external view returns (CreatorData memory);
        function getReaderData(uint256 monthId, address user) external view returns (ReaderData memory);
    }
}
